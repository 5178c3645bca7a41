//! El Vandalo Grill kiosk: landing page carousels, featured menu and the
//! employee kitchen board, rendered with raylib.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod content;
pub mod dashboard;
pub mod engine;
pub mod input;
pub mod landing;
pub mod layout;
pub mod menu;
pub mod orders;
pub mod slide;
pub mod state;
pub mod texture_loader;

pub use carousel::{Carousel, CarouselCommand, CarouselError};
