pub mod engine;
pub mod widgets;

pub use engine::{LandingScreen, LandingSettings};
