//! Fixed geometry of both screens, in render-texture pixels.

use raylib::prelude::Rectangle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn inset(&self, by: f32) -> Rect {
        Rect::new(self.x + by, self.y + by, self.w - 2.0 * by, self.h - 2.0 * by)
    }
}

impl From<Rect> for Rectangle {
    fn from(r: Rect) -> Rectangle {
        Rectangle::new(r.x, r.y, r.w, r.h)
    }
}

/// Split `area` into `count` cells laid out row by row.
pub fn grid_cells(area: Rect, count: usize, columns: usize, gap: f32) -> Vec<Rect> {
    if count == 0 || columns == 0 {
        return Vec::new();
    }
    let columns = columns.min(count);
    let rows = count.div_ceil(columns);
    let cell_w = (area.w - gap * (columns - 1) as f32) / columns as f32;
    let cell_h = (area.h - gap * (rows - 1) as f32) / rows as f32;
    (0..count)
        .map(|i| {
            let (row, col) = (i / columns, i % columns);
            Rect::new(
                area.x + col as f32 * (cell_w + gap),
                area.y + row as f32 * (cell_h + gap),
                cell_w,
                cell_h,
            )
        })
        .collect()
}

/// Indicator dots centered on `center_x`.
pub fn dot_row(center_x: f32, y: f32, count: usize, size: f32, spacing: f32) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let total = count as f32 * size + (count - 1) as f32 * spacing;
    let start = center_x - total * 0.5;
    (0..count)
        .map(|i| Rect::new(start + i as f32 * (size + spacing), y, size, size))
        .collect()
}

pub mod landing {
    use super::Rect;

    pub const HERO: Rect = Rect::new(0.0, 0.0, 1920.0, 170.0);

    pub const PROMO: Rect = Rect::new(160.0, 190.0, 1600.0, 320.0);
    pub const PROMO_PREV: Rect = Rect::new(60.0, 300.0, 80.0, 100.0);
    pub const PROMO_NEXT: Rect = Rect::new(1780.0, 300.0, 80.0, 100.0);
    pub const PROMO_PROGRESS: Rect = Rect::new(160.0, 518.0, 1600.0, 6.0);
    pub const PROMO_DOTS_Y: f32 = 536.0;
    pub const PROMO_PLAY: Rect = Rect::new(1700.0, 532.0, 60.0, 36.0);

    pub const MENU_TITLE_Y: f32 = 585.0;
    pub const MENU: Rect = Rect::new(160.0, 630.0, 1600.0, 290.0);

    pub const TESTIMONIAL: Rect = Rect::new(260.0, 935.0, 1400.0, 95.0);
    pub const TESTIMONIAL_PREV: Rect = Rect::new(160.0, 947.0, 70.0, 70.0);
    pub const TESTIMONIAL_NEXT: Rect = Rect::new(1690.0, 947.0, 70.0, 70.0);
    pub const TESTIMONIAL_DOTS_Y: f32 = 1045.0;

    pub const DOT_SIZE: f32 = 18.0;
    pub const DOT_SPACING: f32 = 18.0;

    /// Heart toggle in the top-right corner of a menu card.
    pub fn favorite_button(card: Rect) -> Rect {
        Rect::new(card.x + card.w - 54.0, card.y + 10.0, 44.0, 44.0)
    }
}

pub mod dashboard {
    use super::Rect;

    pub const HEADER: Rect = Rect::new(0.0, 0.0, 1920.0, 100.0);
    pub const SEARCH: Rect = Rect::new(60.0, 120.0, 700.0, 60.0);
    pub const TABS: Rect = Rect::new(800.0, 120.0, 1060.0, 60.0);
    pub const STATS: Rect = Rect::new(60.0, 200.0, 1800.0, 110.0);
    pub const ROWS: Rect = Rect::new(60.0, 340.0, 1800.0, 676.0);
    pub const ROW_HEIGHT: f32 = 64.0;
    pub const ROW_GAP: f32 = 4.0;

    pub fn row(index: usize) -> Rect {
        Rect::new(
            ROWS.x,
            ROWS.y + index as f32 * (ROW_HEIGHT + ROW_GAP),
            ROWS.w,
            ROW_HEIGHT,
        )
    }

    pub fn advance_button(row: Rect) -> Rect {
        Rect::new(row.x + row.w - 300.0, row.y + 10.0, 160.0, 44.0)
    }

    pub fn cancel_button(row: Rect) -> Rect {
        Rect::new(row.x + row.w - 120.0, row.y + 10.0, 100.0, 44.0)
    }
}
