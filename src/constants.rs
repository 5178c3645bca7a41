pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const PROMO_INTERVAL_MS: u64 = 5000;      // Default promo auto-advance period
pub const SLIDE_IN_DURATION: f32 = 0.45;      // Promo slide-in animation (seconds)
pub const SLIDE_IN_DISTANCE: f32 = 240.0;     // Horizontal travel of the slide-in (pixels)

pub const MENU_COLUMNS: usize = 4;            // Featured menu grid columns
pub const DASHBOARD_ROWS: usize = 10;         // Orders shown on the board
