//! Property tests for the carousel controller.
//!
//! 1. Cursor stays in range under any command sequence
//! 2. advance/retreat are inverses
//! 3. N advances return to the starting cursor
//! 4. jump_to is exact in range and a no-op error out of range
//! 5. toggle_playback is an involution
//! 6. Every non-empty carousel starts running at cursor 0
//! 7. A paused carousel never moves on its own

use std::time::Duration;

use proptest::prelude::*;
use vandalo_grill::{Carousel, CarouselCommand, CarouselError};

const PERIOD: Duration = Duration::from_millis(5000);

fn arb_command() -> impl Strategy<Value = CarouselCommand> {
    prop_oneof![
        Just(CarouselCommand::Advance),
        Just(CarouselCommand::Retreat),
        Just(CarouselCommand::TogglePlayback),
        Just(CarouselCommand::Tick),
        (0usize..12).prop_map(CarouselCommand::JumpTo),
    ]
}

fn carousel(len: usize) -> Carousel<usize> {
    Carousel::with_auto_advance((0..len).collect(), PERIOD)
}

proptest! {
    #[test]
    fn cursor_always_in_range(len in 1usize..10, commands in prop::collection::vec(arb_command(), 0..64)) {
        let mut c = carousel(len);
        for command in commands {
            let _ = c.apply(command);
            prop_assert!(c.cursor() < len);
            c.update(Duration::from_millis(1700));
            prop_assert!(c.cursor() < len);
        }
    }

    #[test]
    fn advance_then_retreat_is_identity(len in 1usize..10, start in 0usize..10) {
        let mut c = carousel(len);
        let start = start % len;
        c.jump_to(start).unwrap();
        c.advance();
        c.retreat();
        prop_assert_eq!(c.cursor(), start);
        c.retreat();
        c.advance();
        prop_assert_eq!(c.cursor(), start);
    }

    #[test]
    fn full_cycle_returns_home(len in 1usize..10, start in 0usize..10) {
        let mut c = carousel(len);
        let start = start % len;
        c.jump_to(start).unwrap();
        for _ in 0..len {
            c.advance();
        }
        prop_assert_eq!(c.cursor(), start);
    }

    #[test]
    fn jump_to_is_exact_or_rejected(len in 1usize..10, before in 0usize..10, target in 0usize..20) {
        let mut c = carousel(len);
        let before = before % len;
        c.jump_to(before).unwrap();
        let result = c.jump_to(target);
        if target < len {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(c.cursor(), target);
        } else {
            prop_assert_eq!(result, Err(CarouselError::OutOfRange { index: target, len }));
            prop_assert_eq!(c.cursor(), before);
        }
    }

    #[test]
    fn toggle_twice_restores_playback(len in 0usize..10, extra in any::<bool>()) {
        let mut c = carousel(len);
        if extra {
            c.toggle_playback();
        }
        let running = c.is_running();
        c.toggle_playback();
        c.toggle_playback();
        prop_assert_eq!(c.is_running(), running);
    }

    #[test]
    fn every_nonempty_carousel_starts_running(len in 1usize..10, period_ms in 0u64..10_000) {
        let manual = Carousel::new((0..len).collect::<Vec<_>>());
        let timed = Carousel::with_auto_advance((0..len).collect::<Vec<_>>(), Duration::from_millis(period_ms));
        prop_assert!(manual.is_running());
        prop_assert!(timed.is_running());
        prop_assert_eq!(manual.cursor(), 0);
        prop_assert_eq!(timed.cursor(), 0);
    }

    #[test]
    fn paused_never_moves(len in 1usize..10, steps in prop::collection::vec(0u64..20_000, 1..32)) {
        let mut c = carousel(len);
        c.toggle_playback();
        for ms in steps {
            c.tick();
            c.update(Duration::from_millis(ms));
            prop_assert_eq!(c.cursor(), 0);
        }
    }
}

#[test]
fn five_slides_one_period_then_pause() {
    let mut c = carousel(5);
    c.update(PERIOD);
    assert_eq!(c.cursor(), 1);
    c.toggle_playback();
    c.update(PERIOD);
    assert_eq!(c.cursor(), 1);
}

#[test]
fn empty_sequence_is_disabled_not_a_panic() {
    let mut c = carousel(0);
    for command in [
        CarouselCommand::Advance,
        CarouselCommand::Retreat,
        CarouselCommand::Tick,
        CarouselCommand::TogglePlayback,
    ] {
        assert_eq!(c.apply(command), Ok(()));
    }
    c.update(PERIOD);
    assert!(!c.is_enabled());
    assert_eq!(c.progress_fraction(), 0.0);
    assert!(c.current().is_none());
}
