use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::*;
use crate::landing::LandingSettings;
use crate::state::ScreenId;

/// El Vandalo Grill landing page and kitchen board.
#[derive(Debug, Parser)]
#[command(name = "vandalo-grill", version, about)]
pub struct Args {
    /// Content file (TOML). Uses the built-in content when omitted.
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Promo carousel auto-advance period in milliseconds, 0 for manual only.
    #[arg(long, default_value_t = PROMO_INTERVAL_MS)]
    pub promo_interval_ms: u64,

    /// Testimonial carousel auto-advance period in milliseconds, 0 for manual only.
    #[arg(long, default_value_t = 0)]
    pub testimonial_interval_ms: u64,

    /// Number of mock orders on the kitchen board.
    #[arg(long, default_value_t = 12)]
    pub orders: usize,

    /// Seed for the mock orders.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Screen shown at startup.
    #[arg(long, value_enum, default_value_t = ScreenId::Landing)]
    pub start_screen: ScreenId,

    /// Window size as a fraction of the 1920x1080 render size.
    #[arg(long, default_value_t = 0.5, value_parser = parse_scale)]
    pub window_scale: f32,
}

fn parse_scale(s: &str) -> Result<f32, String> {
    let scale: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if scale > 0.0 && scale <= 2.0 {
        Ok(scale)
    } else {
        Err(format!("window scale must be in (0, 2], got {scale}"))
    }
}

fn interval(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

impl Args {
    pub fn landing_settings(&self) -> LandingSettings {
        LandingSettings {
            promo_interval: interval(self.promo_interval_ms),
            testimonial_interval: interval(self.testimonial_interval_ms),
        }
    }
}
