//! Rotating selection controller shared by the promo and testimonial carousels.
//!
//! The controller owns a cursor into a fixed sequence of items and an
//! optional auto-advance timer. The timer is driven by [`Carousel::update`]
//! from the frame loop, so automatic ticks go through the same path as user
//! commands and dropping the controller is all it takes to cancel it.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CarouselError {
    #[error("carousel index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}

/// A single instruction for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Advance,
    Retreat,
    JumpTo(usize),
    TogglePlayback,
    Tick,
}

#[derive(Debug, Clone, Copy)]
struct AutoAdvance {
    period: Duration,
    elapsed: Duration,
}

impl AutoAdvance {
    fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    cursor: usize,
    running: bool,
    timer: Option<AutoAdvance>,
}

impl<T> Carousel<T> {
    /// Manual-only carousel: playback starts running but no timer feeds
    /// `tick`, so it only moves on explicit commands.
    pub fn new(items: Vec<T>) -> Self {
        let running = !items.is_empty();
        Self {
            items,
            cursor: 0,
            running,
            timer: None,
        }
    }

    /// Carousel that advances by itself every `period`.
    ///
    /// A zero period is treated as "no timer". An empty sequence yields a
    /// disabled controller that is never running.
    pub fn with_auto_advance(items: Vec<T>, period: Duration) -> Self {
        if period.is_zero() {
            return Self::new(items);
        }
        let running = !items.is_empty();
        Self {
            items,
            cursor: 0,
            running,
            timer: Some(AutoAdvance {
                period,
                elapsed: Duration::ZERO,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// False for an empty carousel; every command is then a no-op.
    pub fn is_enabled(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn period(&self) -> Option<Duration> {
        self.timer.map(|t| t.period)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.is_enabled() && index == self.cursor
    }

    /// `(cursor + 1) / len`, or 0.0 when disabled.
    pub fn progress_fraction(&self) -> f32 {
        if self.items.is_empty() {
            return 0.0;
        }
        (self.cursor + 1) as f32 / self.items.len() as f32
    }

    pub fn advance(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.items.len();
        self.restart_timer();
    }

    pub fn retreat(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len();
        self.cursor = (self.cursor + len - 1) % len;
        self.restart_timer();
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.items.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.cursor = index;
        self.restart_timer();
        Ok(())
    }

    pub fn toggle_playback(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.running = !self.running;
        // Resuming must never pick up a half-elapsed period.
        self.restart_timer();
        debug!(running = self.running, cursor = self.cursor, "carousel playback toggled");
    }

    /// Automatic advance hook; does nothing while paused.
    pub fn tick(&mut self) {
        if self.running {
            self.advance();
        }
    }

    /// Feeds frame time into the auto-advance timer.
    ///
    /// Fires at most one tick per call; the period restarts from zero after
    /// each advance.
    pub fn update(&mut self, dt: Duration) {
        if !self.running {
            return;
        }
        let Some(timer) = self.timer.as_mut() else {
            return;
        };
        timer.elapsed += dt;
        if timer.elapsed >= timer.period {
            trace!(cursor = self.cursor, "carousel auto-advance");
            self.tick();
        }
    }

    pub fn apply(&mut self, command: CarouselCommand) -> Result<(), CarouselError> {
        match command {
            CarouselCommand::Advance => self.advance(),
            CarouselCommand::Retreat => self.retreat(),
            CarouselCommand::JumpTo(index) => self.jump_to(index)?,
            CarouselCommand::TogglePlayback => self.toggle_playback(),
            CarouselCommand::Tick => self.tick(),
        }
        Ok(())
    }

    fn restart_timer(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.restart();
        }
    }
}
