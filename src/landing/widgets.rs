//! Drawing helpers for the landing page sections.

use raylib::prelude::*;

use crate::content::{Hero, MenuItem, Testimonial};
use crate::layout::{Rect, landing as geo};
use crate::menu::format_price;

const PANEL: Color = Color::new(38, 32, 30, 255);
const EMBER: Color = Color::new(231, 76, 60, 255);
const SAND: Color = Color::new(243, 229, 171, 255);

pub fn draw_hero(d: &mut RaylibDrawHandle, hero: &Hero) {
    let r = geo::HERO;
    d.draw_rectangle_rec(Rectangle::from(r), Color::new(120, 28, 20, 255));
    d.draw_text(&hero.title, 80, 24, 72, SAND);
    d.draw_text(&hero.tagline, 84, 104, 30, Color::RAYWHITE);
    d.draw_text(&hero.call_to_action, 1100, 112, 24, Color::LIGHTGRAY);
}

pub fn draw_placeholder(d: &mut RaylibDrawHandle, area: Rect, message: &str) {
    d.draw_rectangle_rec(Rectangle::from(area), PANEL);
    d.draw_text(message, area.x as i32 + 40, area.y as i32 + 30, 32, Color::GRAY);
}

pub fn draw_arrow(d: &mut RaylibDrawHandle, area: Rect, glyph: &str) {
    d.draw_rectangle_rec(Rectangle::from(area), PANEL);
    let (cx, cy) = area.center();
    d.draw_text(glyph, cx as i32 - 12, cy as i32 - 24, 48, SAND);
}

pub fn draw_progress(d: &mut RaylibDrawHandle, area: Rect, fraction: f32) {
    d.draw_rectangle_rec(Rectangle::from(area), PANEL);
    let filled = Rect::new(area.x, area.y, area.w * fraction.clamp(0.0, 1.0), area.h);
    d.draw_rectangle_rec(Rectangle::from(filled), EMBER);
}

pub fn draw_dot(d: &mut RaylibDrawHandle, area: Rect, active: bool) {
    let (cx, cy) = area.center();
    if active {
        d.draw_circle(cx as i32, cy as i32, area.w * 0.5, EMBER);
    } else {
        d.draw_circle_lines(cx as i32, cy as i32, area.w * 0.5, Color::LIGHTGRAY);
    }
}

pub fn draw_play_pause(d: &mut RaylibDrawHandle, area: Rect, running: bool) {
    d.draw_rectangle_rec(Rectangle::from(area), PANEL);
    let glyph = if running { "II" } else { ">" };
    d.draw_text(glyph, area.x as i32 + 22, area.y as i32 + 6, 26, SAND);
}

pub fn draw_menu_card(d: &mut RaylibDrawHandle, card: Rect, item: &MenuItem, favorite: bool) {
    d.draw_rectangle_rec(Rectangle::from(card), PANEL);
    let x = card.x as i32 + 20;
    let y = card.y as i32;
    d.draw_text(&item.name, x, y + 16, 30, SAND);
    d.draw_text(&item.description, x, y + 58, 18, Color::LIGHTGRAY);

    let mut tags = item.category.to_string();
    if item.spicy {
        tags.push_str("  |  spicy");
    }
    d.draw_text(&tags, x, y + 92, 18, Color::GRAY);
    d.draw_text(&format_price(u64::from(item.price_cents)), card.x as i32 + card.w as i32 - 110, y + 90, 26, EMBER);

    let heart = geo::favorite_button(card);
    let (cx, cy) = heart.center();
    if favorite {
        d.draw_circle(cx as i32, cy as i32, heart.w * 0.4, EMBER);
    } else {
        d.draw_circle_lines(cx as i32, cy as i32, heart.w * 0.4, Color::LIGHTGRAY);
    }
}

pub fn draw_testimonial(d: &mut RaylibDrawHandle, area: Rect, t: &Testimonial) {
    d.draw_rectangle_rec(Rectangle::from(area), PANEL);
    let x = area.x as i32 + 30;
    let y = area.y as i32;
    d.draw_text(&format!("\"{}\"", t.quote), x, y + 14, 28, Color::RAYWHITE);
    let stars = "*".repeat(t.rating as usize);
    d.draw_text(&format!("{}  -  {}", stars, t.author), x, y + 56, 24, SAND);
}
