use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vandalo_grill::config::Args;
use vandalo_grill::constants::*;
use vandalo_grill::content::Content;
use vandalo_grill::dashboard::DashboardScreen;
use vandalo_grill::engine::Screen;
use vandalo_grill::input;
use vandalo_grill::landing::LandingScreen;
use vandalo_grill::orders::{OrderBook, generate_orders};
use vandalo_grill::slide::PromoSlide;
use vandalo_grill::state::ScreenId;
use vandalo_grill::texture_loader::load_texture_with_exif_rotation;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let content = Content::load(args.content.as_deref()).context("could not load landing content")?;
    let orders = generate_orders(&content.menu, args.orders, args.seed);

    let (mut rl, thread) = raylib::init()
        .size(
            (RENDER_WIDTH as f32 * args.window_scale) as i32,
            (RENDER_HEIGHT as f32 * args.window_scale) as i32,
        )
        .title("El Vandalo Grill")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape clears the dashboard search instead of closing the window
    rl.set_exit_key(None);

    // --- Load promo slides, falling back to a plain card when an image fails ---
    let mut slides = Vec::with_capacity(content.promos.len());
    for promo in content.promos.iter().cloned() {
        let image = match promo.image.as_deref() {
            Some(path) => match load_texture_with_exif_rotation(&mut rl, &thread, path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!("promo `{}` shown without image: {e:#}", promo.title);
                    None
                }
            },
            None => None,
        };
        slides.push(PromoSlide::new(promo, image));
    }

    let mut landing = LandingScreen::new(content, slides, args.landing_settings());
    let mut dashboard = DashboardScreen::new(OrderBook::new(orders));
    let mut active = args.start_screen;

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("failed to create render texture: {e}"))?;

    info!(screen = ?active, "kiosk running");

    // Fixed step keeps carousel timing independent of the display refresh rate
    let dt = Duration::from_secs_f32(FRAME_TIME);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let screen: &mut dyn Screen = match active {
            ScreenId::Landing => &mut landing,
            ScreenId::Dashboard => &mut dashboard,
        };

        for event in input::poll(&mut rl) {
            if let Some(next) = screen.handle(&event) {
                info!(from = ?active, to = ?next, "switching screen");
                active = next;
                break;
            }
        }

        // Both screens keep their clocks running so the promos never stall
        landing.update(dt);
        dashboard.update(dt);

        let screen: &dyn Screen = match active {
            ScreenId::Landing => &landing,
            ScreenId::Dashboard => &dashboard,
        };

        // --- Render into the fixed size "framebuffer" ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            d.clear_background(Color::new(24, 20, 18, 255));
            screen.draw(&mut d);
        });

        // Scale the framebuffer to the window, flipped as render textures are stored upside down
        let mut d2 = rl.begin_drawing(&thread);
        let sw = d2.get_screen_width() as f32;
        let sh = d2.get_screen_height() as f32;
        d2.clear_background(Color::BLACK);
        d2.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("window closed");
    Ok(())
}
