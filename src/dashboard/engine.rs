use std::time::Duration;

use raylib::prelude::*;
use tracing::{debug, warn};

use crate::constants::*;
use crate::engine::Screen;
use crate::input::{InputEvent, Key};
use crate::layout::{self, Rect, dashboard as geo};
use crate::menu::format_price;
use crate::orders::{Order, OrderBook, OrderFilter, OrderStatus};
use crate::state::ScreenId;

const PANEL: Color = Color::new(34, 40, 49, 255);
const ACCENT: Color = Color::new(0, 173, 181, 255);
const MAX_QUERY_LEN: usize = 40;

/// Tab 0 is "All", then one tab per status.
fn tab_status(tab: usize) -> Option<OrderStatus> {
    tab.checked_sub(1).and_then(|i| OrderStatus::ALL.get(i).copied())
}

fn tab_cells() -> Vec<Rect> {
    layout::grid_cells(geo::TABS, OrderStatus::ALL.len() + 1, OrderStatus::ALL.len() + 1, 10.0)
}

fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => Color::new(241, 196, 15, 255),
        OrderStatus::Preparing => Color::new(230, 126, 34, 255),
        OrderStatus::Ready => Color::new(46, 204, 113, 255),
        OrderStatus::Delivered => Color::new(149, 165, 166, 255),
        OrderStatus::Cancelled => Color::new(192, 57, 43, 255),
    }
}

pub struct DashboardScreen {
    book: OrderBook,
    filter: OrderFilter,
}

impl DashboardScreen {
    pub fn new(book: OrderBook) -> Self {
        Self {
            book,
            filter: OrderFilter::default(),
        }
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn filter(&self) -> &OrderFilter {
        &self.filter
    }

    /// Ids of the orders currently on the board, top to bottom.
    pub fn visible_ids(&self) -> Vec<u32> {
        self.book
            .filtered(&self.filter)
            .take(DASHBOARD_ROWS)
            .map(|o| o.id)
            .collect()
    }

    fn set_status_filter(&mut self, status: Option<OrderStatus>) {
        self.filter.status = status;
        debug!(?status, "status filter changed");
    }

    fn click(&mut self, x: f32, y: f32) {
        if let Some(tab) = tab_cells().iter().position(|r| r.contains(x, y)) {
            self.set_status_filter(tab_status(tab));
            return;
        }
        for (i, id) in self.visible_ids().into_iter().enumerate() {
            let row = geo::row(i);
            let result = if geo::advance_button(row).contains(x, y) {
                self.book.advance_status(id).map(|_| ())
            } else if geo::cancel_button(row).contains(x, y) {
                self.book.cancel(id)
            } else {
                continue;
            };
            if let Err(e) = result {
                warn!("{e}");
            }
            return;
        }
    }

    fn draw_row(&self, d: &mut RaylibDrawHandle, row: Rect, order: &Order) {
        d.draw_rectangle_rec(Rectangle::from(row), PANEL);
        let y = row.y as i32 + 18;
        d.draw_text(&format!("#{}", order.id), row.x as i32 + 20, y, 28, Color::RAYWHITE);
        d.draw_text(&order.customer, row.x as i32 + 140, y, 28, Color::RAYWHITE);

        let mut summary = order.summary();
        if summary.chars().count() > 60 {
            summary = summary.chars().take(57).collect::<String>() + "...";
        }
        d.draw_text(&summary, row.x as i32 + 420, y + 4, 22, Color::LIGHTGRAY);
        d.draw_text(&format_price(order.total_cents()), row.x as i32 + 1160, y, 28, ACCENT);
        d.draw_text(
            &format!("{}m", order.placed_minutes_ago),
            row.x as i32 + 1290,
            y,
            24,
            Color::GRAY,
        );
        d.draw_text(order.status.label(), row.x as i32 + 1370, y, 26, status_color(order.status));

        if let Some(next) = order.status.next() {
            let button = geo::advance_button(row);
            d.draw_rectangle_rec(Rectangle::from(button), status_color(next));
            d.draw_text(
                &format!("-> {}", next.label()),
                button.x as i32 + 10,
                button.y as i32 + 12,
                20,
                Color::BLACK,
            );
            let cancel = geo::cancel_button(row);
            d.draw_rectangle_lines_ex(Rectangle::from(cancel), 2.0, status_color(OrderStatus::Cancelled));
            d.draw_text("X", cancel.x as i32 + 42, cancel.y as i32 + 10, 24, Color::RAYWHITE);
        }
    }
}

impl Screen for DashboardScreen {
    fn handle(&mut self, event: &InputEvent) -> Option<ScreenId> {
        match *event {
            InputEvent::Key(Key::Tab) => return Some(ScreenId::Landing),
            InputEvent::Key(Key::Backspace) => {
                self.filter.query.pop();
            }
            InputEvent::Key(Key::Escape) => self.filter.query.clear(),
            InputEvent::Char(c) => {
                if self.filter.query.chars().count() < MAX_QUERY_LEN {
                    self.filter.query.push(c);
                }
            }
            InputEvent::Click { x, y } => self.click(x, y),
            InputEvent::Key(_) => {}
        }
        None
    }

    fn update(&mut self, _dt: Duration) {}

    fn draw(&self, d: &mut RaylibDrawHandle) {
        d.draw_rectangle_rec(Rectangle::from(geo::HEADER), PANEL);
        d.draw_text("Kitchen board", 60, 26, 52, Color::RAYWHITE);
        d.draw_text("TAB: back to the landing page", 1400, 40, 24, Color::GRAY);

        // search box
        d.draw_rectangle_rec(Rectangle::from(geo::SEARCH), PANEL);
        let (text, tint) = if self.filter.query.is_empty() {
            ("Search customer, #order or item...".to_string(), Color::GRAY)
        } else {
            (format!("{}_", self.filter.query), Color::RAYWHITE)
        };
        d.draw_text(&text, geo::SEARCH.x as i32 + 20, geo::SEARCH.y as i32 + 16, 28, tint);

        for (i, cell) in tab_cells().into_iter().enumerate() {
            let status = tab_status(i);
            let selected = status == self.filter.status;
            let fill = if selected { ACCENT } else { PANEL };
            d.draw_rectangle_rec(Rectangle::from(cell), fill);
            let label = status.map_or("All", OrderStatus::label);
            d.draw_text(label, cell.x as i32 + 14, cell.y as i32 + 18, 24, Color::RAYWHITE);
        }

        let stats = self.book.stats();
        let cards = [
            ("Orders", stats.total.to_string()),
            ("Active", stats.active().to_string()),
            ("Ready", stats.count(OrderStatus::Ready).to_string()),
            ("Delivered", stats.count(OrderStatus::Delivered).to_string()),
            ("Revenue", format_price(stats.revenue_cents)),
        ];
        for ((label, value), cell) in cards.iter().zip(layout::grid_cells(geo::STATS, cards.len(), cards.len(), 20.0)) {
            d.draw_rectangle_rec(Rectangle::from(cell), PANEL);
            d.draw_text(label, cell.x as i32 + 20, cell.y as i32 + 14, 24, Color::GRAY);
            d.draw_text(value, cell.x as i32 + 20, cell.y as i32 + 48, 48, Color::RAYWHITE);
        }

        let visible: Vec<&Order> = self.book.filtered(&self.filter).take(DASHBOARD_ROWS).collect();
        if visible.is_empty() {
            d.draw_text("No orders match.", geo::ROWS.x as i32 + 20, geo::ROWS.y as i32 + 20, 32, Color::GRAY);
        }
        for (i, order) in visible.into_iter().enumerate() {
            self.draw_row(d, geo::row(i), order);
        }
    }
}
