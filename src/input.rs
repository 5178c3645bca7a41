//! Per-frame input, already mapped into render-texture coordinates.

use raylib::prelude::*;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Tab,
    Backspace,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(Key),
    Click { x: f32, y: f32 },
    Char(char),
}

const KEY_MAP: [(KeyboardKey, Key); 8] = [
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_RIGHT, Key::Right),
    (KeyboardKey::KEY_UP, Key::Up),
    (KeyboardKey::KEY_DOWN, Key::Down),
    (KeyboardKey::KEY_SPACE, Key::Space),
    (KeyboardKey::KEY_TAB, Key::Tab),
    (KeyboardKey::KEY_BACKSPACE, Key::Backspace),
    (KeyboardKey::KEY_ESCAPE, Key::Escape),
];

/// Map a window position onto the fixed-size render texture.
pub fn to_render_space(x: f32, y: f32, screen_width: f32, screen_height: f32) -> (f32, f32) {
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return (x, y);
    }
    (
        x * RENDER_WIDTH as f32 / screen_width,
        y * RENDER_HEIGHT as f32 / screen_height,
    )
}

/// Drain this frame's keyboard, text and mouse input.
pub fn poll(rl: &mut RaylibHandle) -> Vec<InputEvent> {
    let mut events = Vec::new();

    for (raylib_key, key) in KEY_MAP {
        if rl.is_key_pressed(raylib_key) {
            events.push(InputEvent::Key(key));
        }
    }

    while let Some(c) = rl.get_char_pressed() {
        if !c.is_control() {
            events.push(InputEvent::Char(c));
        }
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let pos = rl.get_mouse_position();
        let (x, y) = to_render_space(
            pos.x,
            pos.y,
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );
        events.push(InputEvent::Click { x, y });
    }

    events
}
