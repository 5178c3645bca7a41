use raylib::prelude::*;

use crate::constants::*;
use crate::content::{Promo, Rgb};
use crate::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Forward,  // New slide enters from the right
    Backward, // New slide enters from the left
}

/// Horizontal slide-in played whenever the visible promo changes.
#[derive(Debug, Clone, Copy)]
pub struct SlideIn {
    direction: SlideDirection,
    animation_timer: f32,
    pub is_animating: bool,
}

impl Default for SlideIn {
    fn default() -> Self {
        Self {
            direction: SlideDirection::Forward,
            animation_timer: SLIDE_IN_DURATION,
            is_animating: false,
        }
    }
}

impl SlideIn {
    pub fn start(&mut self, direction: SlideDirection) {
        self.direction = direction;
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        if self.animation_timer >= SLIDE_IN_DURATION {
            self.animation_timer = SLIDE_IN_DURATION;
            self.is_animating = false;
        }
    }

    /// Current x offset in pixels; zero once settled.
    pub fn offset(&self) -> f32 {
        let t = (self.animation_timer / SLIDE_IN_DURATION).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3); // easeOutCubic
        let remaining = SLIDE_IN_DISTANCE * (1.0 - eased);
        match self.direction {
            SlideDirection::Forward => remaining,
            SlideDirection::Backward => -remaining,
        }
    }

    /// Opacity of the incoming slide, 0.0 to 1.0.
    pub fn alpha(&self) -> f32 {
        (self.animation_timer / SLIDE_IN_DURATION).clamp(0.0, 1.0)
    }
}

pub fn color(rgb: Rgb) -> Color {
    Color::new(rgb.r, rgb.g, rgb.b, 255)
}

pub struct PromoSlide {
    pub promo: Promo,
    image: Option<Texture2D>,
}

impl PromoSlide {
    pub fn new(promo: Promo, image: Option<Texture2D>) -> Self {
        Self { promo, image }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rect, anim: &SlideIn) {
        let alpha = (anim.alpha() * 255.0) as u8;
        let dx = anim.offset();
        let card = Rect::new(area.x + dx, area.y, area.w, area.h);

        let accent = color(self.promo.accent);
        d.draw_rectangle_rec(
            Rectangle::from(card),
            Color::new(accent.r, accent.g, accent.b, alpha),
        );

        let text_x = match &self.image {
            Some(image) => {
                // Fit the picture into the right half of the card
                let slot = Rect::new(card.x + card.w * 0.55, card.y + 20.0, card.w * 0.42, card.h - 40.0);
                let tex_width = image.width() as f32;
                let tex_height = image.height() as f32;
                let scale = (slot.w / tex_width).min(slot.h / tex_height);
                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;
                let (cx, cy) = slot.center();
                d.draw_texture_pro(
                    image,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(cx - scaled_width * 0.5, cy - scaled_height * 0.5, scaled_width, scaled_height),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::new(255, 255, 255, alpha),
                );
                card.x + 60.0
            }
            None => card.x + 80.0,
        };

        let white = Color::new(255, 255, 255, alpha);
        let badge = Rect::new(text_x, card.y + 40.0, 24.0 + 18.0 * self.promo.badge.len() as f32, 44.0);
        d.draw_rectangle_rec(Rectangle::from(badge), Color::new(0, 0, 0, alpha / 3));
        d.draw_text(&self.promo.badge, badge.x as i32 + 12, badge.y as i32 + 10, 26, white);
        d.draw_text(&self.promo.title, text_x as i32, card.y as i32 + 110, 84, white);
        d.draw_text(&self.promo.subtitle, text_x as i32, card.y as i32 + 220, 38, white);
    }
}
