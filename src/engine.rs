use std::time::Duration;

use raylib::prelude::*;

use crate::input::InputEvent;
use crate::state::ScreenId;

/// One full-window view. Input, time and drawing all arrive on the frame loop.
pub trait Screen {
    /// Handle one input event; returns the screen to switch to, if any.
    fn handle(&mut self, event: &InputEvent) -> Option<ScreenId>;
    fn update(&mut self, dt: Duration);
    fn draw(&self, d: &mut RaylibDrawHandle);
}
