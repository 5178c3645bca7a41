use std::time::Duration;

use raylib::prelude::*;
use tracing::{debug, info, warn};

use crate::carousel::{Carousel, CarouselCommand};
use crate::constants::*;
use crate::content::{Content, Hero, Testimonial};
use crate::engine::Screen;
use crate::input::{InputEvent, Key};
use crate::landing::widgets;
use crate::layout::{self, Rect, landing as geo};
use crate::menu::MenuGrid;
use crate::slide::{PromoSlide, SlideDirection, SlideIn};
use crate::state::ScreenId;

/// Auto-advance periods; `None` keeps a carousel manual-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingSettings {
    pub promo_interval: Option<Duration>,
    pub testimonial_interval: Option<Duration>,
}

impl Default for LandingSettings {
    fn default() -> Self {
        Self {
            promo_interval: Some(Duration::from_millis(PROMO_INTERVAL_MS)),
            testimonial_interval: None,
        }
    }
}

fn carousel<T>(items: Vec<T>, interval: Option<Duration>) -> Carousel<T> {
    match interval {
        Some(period) => Carousel::with_auto_advance(items, period),
        None => Carousel::new(items),
    }
}

pub struct LandingScreen {
    hero: Hero,
    promos: Carousel<PromoSlide>,
    slide_in: SlideIn,
    menu: MenuGrid,
    testimonials: Carousel<Testimonial>,
}

impl LandingScreen {
    pub fn new(content: Content, slides: Vec<PromoSlide>, settings: LandingSettings) -> Self {
        let menu = MenuGrid::new(content.featured_menu());
        info!(
            promos = slides.len(),
            featured = menu.items().len(),
            testimonials = content.testimonials.len(),
            "landing page ready"
        );
        Self {
            hero: content.hero,
            promos: carousel(slides, settings.promo_interval),
            slide_in: SlideIn::default(),
            menu,
            testimonials: carousel(content.testimonials, settings.testimonial_interval),
        }
    }

    pub fn promos(&self) -> &Carousel<PromoSlide> {
        &self.promos
    }

    pub fn testimonials(&self) -> &Carousel<Testimonial> {
        &self.testimonials
    }

    pub fn menu(&self) -> &MenuGrid {
        &self.menu
    }

    pub fn slide_in(&self) -> &SlideIn {
        &self.slide_in
    }

    fn promo(&mut self, command: CarouselCommand) {
        let before = self.promos.cursor();
        if let Err(e) = self.promos.apply(command) {
            warn!("ignoring promo command {command:?}: {e}");
            return;
        }
        let after = self.promos.cursor();
        if after == before {
            return;
        }
        let direction = match command {
            CarouselCommand::Retreat => SlideDirection::Backward,
            CarouselCommand::JumpTo(i) if i < before => SlideDirection::Backward,
            _ => SlideDirection::Forward,
        };
        self.slide_in.start(direction);
        debug!(from = before, to = after, "promo changed");
    }

    fn testimonial(&mut self, command: CarouselCommand) {
        if let Err(e) = self.testimonials.apply(command) {
            warn!("ignoring testimonial command {command:?}: {e}");
        }
    }

    fn promo_dots(&self) -> Vec<Rect> {
        let (cx, _) = geo::PROMO.center();
        layout::dot_row(cx, geo::PROMO_DOTS_Y, self.promos.len(), geo::DOT_SIZE, geo::DOT_SPACING)
    }

    fn testimonial_dots(&self) -> Vec<Rect> {
        let (cx, _) = geo::TESTIMONIAL.center();
        layout::dot_row(
            cx,
            geo::TESTIMONIAL_DOTS_Y,
            self.testimonials.len(),
            geo::DOT_SIZE,
            geo::DOT_SPACING,
        )
    }

    fn menu_cards(&self) -> Vec<Rect> {
        layout::grid_cells(geo::MENU, self.menu.items().len(), MENU_COLUMNS, 20.0)
    }

    fn click(&mut self, x: f32, y: f32) {
        if geo::PROMO_PREV.contains(x, y) {
            self.promo(CarouselCommand::Retreat);
        } else if geo::PROMO_NEXT.contains(x, y) {
            self.promo(CarouselCommand::Advance);
        } else if geo::PROMO_PLAY.contains(x, y) {
            self.promo(CarouselCommand::TogglePlayback);
        } else if let Some(i) = self.promo_dots().iter().position(|r| r.contains(x, y)) {
            self.promo(CarouselCommand::JumpTo(i));
        } else if geo::TESTIMONIAL_PREV.contains(x, y) {
            self.testimonial(CarouselCommand::Retreat);
        } else if geo::TESTIMONIAL_NEXT.contains(x, y) {
            self.testimonial(CarouselCommand::Advance);
        } else if let Some(i) = self.testimonial_dots().iter().position(|r| r.contains(x, y)) {
            self.testimonial(CarouselCommand::JumpTo(i));
        } else if let Some(i) = self
            .menu_cards()
            .iter()
            .position(|card| geo::favorite_button(*card).contains(x, y))
        {
            let id = self.menu.items()[i].id.clone();
            if let Err(e) = self.menu.toggle_favorite(&id) {
                warn!("{e}");
            }
        }
    }
}

impl Screen for LandingScreen {
    fn handle(&mut self, event: &InputEvent) -> Option<ScreenId> {
        match *event {
            InputEvent::Key(Key::Tab) => return Some(ScreenId::Dashboard),
            InputEvent::Key(Key::Left) => self.promo(CarouselCommand::Retreat),
            InputEvent::Key(Key::Right) => self.promo(CarouselCommand::Advance),
            InputEvent::Key(Key::Space) => self.promo(CarouselCommand::TogglePlayback),
            InputEvent::Key(Key::Up) => self.testimonial(CarouselCommand::Retreat),
            InputEvent::Key(Key::Down) => self.testimonial(CarouselCommand::Advance),
            InputEvent::Char(c) => {
                // 1-9 jump straight to a promo, but only to ones that exist.
                if let Some(d) = c.to_digit(10).filter(|d| *d >= 1) {
                    let index = d as usize - 1;
                    if index < self.promos.len() {
                        self.promo(CarouselCommand::JumpTo(index));
                    }
                }
            }
            InputEvent::Click { x, y } => self.click(x, y),
            InputEvent::Key(_) => {}
        }
        None
    }

    fn update(&mut self, dt: Duration) {
        self.slide_in.update(dt.as_secs_f32());

        let before = self.promos.cursor();
        self.promos.update(dt);
        if self.promos.cursor() != before {
            self.slide_in.start(SlideDirection::Forward);
        }
        self.testimonials.update(dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        widgets::draw_hero(d, &self.hero);

        match self.promos.current() {
            Some(slide) => slide.draw(d, geo::PROMO, &self.slide_in),
            None => widgets::draw_placeholder(d, geo::PROMO, "No promotions right now"),
        }
        if self.promos.is_enabled() {
            widgets::draw_arrow(d, geo::PROMO_PREV, "<");
            widgets::draw_arrow(d, geo::PROMO_NEXT, ">");
            widgets::draw_progress(d, geo::PROMO_PROGRESS, self.promos.progress_fraction());
            for (i, dot) in self.promo_dots().iter().enumerate() {
                widgets::draw_dot(d, *dot, self.promos.is_current(i));
            }
            if self.promos.period().is_some() {
                widgets::draw_play_pause(d, geo::PROMO_PLAY, self.promos.is_running());
            }
        }

        d.draw_text(
            &format!("Featured menu  ({} favorites)", self.menu.favorites_count()),
            geo::MENU.x as i32,
            geo::MENU_TITLE_Y as i32,
            36,
            Color::RAYWHITE,
        );
        for (item, card) in self.menu.items().iter().zip(self.menu_cards()) {
            widgets::draw_menu_card(d, card, item, self.menu.is_favorite(&item.id));
        }

        match self.testimonials.current() {
            Some(t) => widgets::draw_testimonial(d, geo::TESTIMONIAL, t),
            None => widgets::draw_placeholder(d, geo::TESTIMONIAL, "Be the first to leave a review"),
        }
        if self.testimonials.is_enabled() {
            widgets::draw_arrow(d, geo::TESTIMONIAL_PREV, "<");
            widgets::draw_arrow(d, geo::TESTIMONIAL_NEXT, ">");
            for (i, dot) in self.testimonial_dots().iter().enumerate() {
                widgets::draw_dot(d, *dot, self.testimonials.is_current(i));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(settings: LandingSettings) -> LandingScreen {
        let content = Content::builtin().unwrap();
        let slides = content
            .promos
            .iter()
            .cloned()
            .map(|p| PromoSlide::new(p, None))
            .collect();
        LandingScreen::new(content, slides, settings)
    }

    fn click(s: &mut LandingScreen, r: Rect) {
        let (x, y) = r.center();
        s.handle(&InputEvent::Click { x, y });
    }

    #[test]
    fn defaults_match_the_site() {
        let s = screen(LandingSettings::default());
        assert!(s.promos().is_running());
        assert_eq!(s.promos().period(), Some(Duration::from_millis(5000)));
        assert!(s.testimonials().is_running());
        assert_eq!(s.testimonials().period(), None);
    }

    #[test]
    fn promos_rotate_on_the_frame_clock() {
        let mut s = screen(LandingSettings::default());
        for _ in 0..5 {
            s.update(Duration::from_secs(1));
        }
        assert_eq!(s.promos().cursor(), 1);
        assert!(s.slide_in().is_animating);
        // testimonials stay put without a timer
        assert_eq!(s.testimonials().cursor(), 0);
    }

    #[test]
    fn keyboard_controls_promos() {
        let mut s = screen(LandingSettings::default());
        s.handle(&InputEvent::Key(Key::Left));
        assert_eq!(s.promos().cursor(), 4);
        s.handle(&InputEvent::Key(Key::Right));
        assert_eq!(s.promos().cursor(), 0);
        s.handle(&InputEvent::Char('3'));
        assert_eq!(s.promos().cursor(), 2);
        s.handle(&InputEvent::Char('9'));
        assert_eq!(s.promos().cursor(), 2);
        s.handle(&InputEvent::Key(Key::Space));
        assert!(!s.promos().is_running());
        s.update(Duration::from_secs(10));
        assert_eq!(s.promos().cursor(), 2);
    }

    #[test]
    fn mouse_controls() {
        let mut s = screen(LandingSettings::default());
        click(&mut s, geo::PROMO_NEXT);
        assert_eq!(s.promos().cursor(), 1);
        click(&mut s, geo::PROMO_PREV);
        assert_eq!(s.promos().cursor(), 0);
        let dots = s.promo_dots();
        click(&mut s, dots[4]);
        assert_eq!(s.promos().cursor(), 4);
        click(&mut s, geo::PROMO_PLAY);
        assert!(!s.promos().is_running());

        click(&mut s, geo::TESTIMONIAL_NEXT);
        assert_eq!(s.testimonials().cursor(), 1);
        let dots = s.testimonial_dots();
        click(&mut s, dots[3]);
        assert_eq!(s.testimonials().cursor(), 3);
    }

    #[test]
    fn hearts_toggle_favorites() {
        let mut s = screen(LandingSettings::default());
        let cards = s.menu_cards();
        let id = s.menu().items()[2].id.clone();
        click(&mut s, geo::favorite_button(cards[2]));
        assert!(s.menu().is_favorite(&id));
        click(&mut s, geo::favorite_button(cards[2]));
        assert!(!s.menu().is_favorite(&id));
    }

    #[test]
    fn tab_switches_to_dashboard() {
        let mut s = screen(LandingSettings::default());
        assert_eq!(s.handle(&InputEvent::Key(Key::Tab)), Some(ScreenId::Dashboard));
    }

    #[test]
    fn empty_content_is_inert() {
        let mut content = Content::builtin().unwrap();
        content.testimonials.clear();
        let mut s = LandingScreen::new(content, Vec::new(), LandingSettings::default());
        assert!(!s.promos().is_enabled());
        s.handle(&InputEvent::Key(Key::Right));
        s.handle(&InputEvent::Key(Key::Down));
        s.update(Duration::from_secs(30));
        assert_eq!(s.promos().cursor(), 0);
        assert!(s.testimonials().current().is_none());
    }
}
