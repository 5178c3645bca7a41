//! Order book behind the employee dashboard.
//!
//! Orders are mock data generated from a seed; the dashboard filters them by
//! a free-text query and a status, and moves them through the kitchen
//! pipeline.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

use crate::content::MenuItem;

const CUSTOMERS: &[&str] = &[
    "Ana Lopez",
    "Ben Carter",
    "Carmen Diaz",
    "Dev Patel",
    "Elena Rossi",
    "Frank Miller",
    "Grace Kim",
    "Hector Ramirez",
    "Isabel Cruz",
    "Jamal Wright",
    "Keiko Tanaka",
    "Luis Herrera",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("no order #{0}")]
    NotFound(u32),
    #[error("order #{id} is already {status}")]
    Terminal { id: u32, status: OrderStatus },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Next step in the kitchen pipeline, `None` once terminal.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: String,
    pub name: String,
    pub quantity: u8,
    pub unit_price_cents: u32,
}

impl OrderLine {
    pub fn total_cents(&self) -> u64 {
        u64::from(self.unit_price_cents) * u64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: u32,
    pub customer: String,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub placed_minutes_ago: u16,
}

impl Order {
    pub fn total_cents(&self) -> u64 {
        self.lines.iter().map(OrderLine::total_cents).sum()
    }

    pub fn item_count(&self) -> usize {
        self.lines.iter().map(|l| l.quantity as usize).sum()
    }

    /// One-line summary such as `2x Elote, 1x Churros`.
    pub fn summary(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{}x {}", l.quantity, l.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn random_status(rng: &mut impl Rng) -> OrderStatus {
    // Weighted toward the active part of the pipeline.
    match rng.random_range(0..10) {
        0..=2 => OrderStatus::Pending,
        3..=5 => OrderStatus::Preparing,
        6..=7 => OrderStatus::Ready,
        8 => OrderStatus::Delivered,
        _ => OrderStatus::Cancelled,
    }
}

fn random_line(rng: &mut impl Rng, menu: &[MenuItem]) -> OrderLine {
    let item = &menu[rng.random_range(0..menu.len())];
    OrderLine {
        item_id: item.id.clone(),
        name: item.name.clone(),
        quantity: rng.random_range(1..=3),
        unit_price_cents: item.price_cents,
    }
}

fn random_order(rng: &mut impl Rng, menu: &[MenuItem], id: u32) -> Order {
    let num_lines = rng.random_range(1..=4);
    let lines = (0..num_lines).map(|_| random_line(&mut *rng, menu)).collect();
    Order {
        id,
        customer: CUSTOMERS[rng.random_range(0..CUSTOMERS.len())].to_string(),
        lines,
        status: random_status(rng),
        placed_minutes_ago: rng.random_range(1..=90),
    }
}

/// Deterministic mock orders drawn from `menu`. Ids start at 1001.
pub fn generate_orders(menu: &[MenuItem], n: usize, seed: u64) -> Vec<Order> {
    if menu.is_empty() {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut orders: Vec<Order> = (0..n)
        .map(|i| random_order(&mut rng, menu, 1001 + i as u32))
        .collect();
    // Newest first, the way the board lists them.
    orders.sort_by_key(|o| o.placed_minutes_ago);
    orders
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub query: String,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    /// Case-insensitive match on customer, `#id` or item names, and status.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let id = format!("#{}", order.id);
        order.customer.to_lowercase().contains(&query)
            || id.contains(&query)
            || order
                .lines
                .iter()
                .any(|l| l.name.to_lowercase().contains(&query))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub delivered: usize,
    pub cancelled: usize,
    /// Sum over orders that were not cancelled.
    pub revenue_cents: u64,
}

impl OrderStats {
    pub fn active(&self) -> usize {
        self.pending + self.preparing + self.ready
    }

    pub fn count(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Preparing => self.preparing,
            OrderStatus::Ready => self.ready,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Cancelled => self.cancelled,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new(orders: Vec<Order>) -> Self {
        info!(orders = orders.len(), "order book ready");
        Self { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: u32) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn filtered<'a>(&'a self, filter: &'a OrderFilter) -> impl Iterator<Item = &'a Order> + 'a {
        self.orders.iter().filter(move |o| filter.matches(o))
    }

    /// Moves the order one step down the pipeline and returns its new status.
    pub fn advance_status(&mut self, id: u32) -> Result<OrderStatus, OrderError> {
        let order = self.find_mut(id)?;
        let next = order.status.next().ok_or(OrderError::Terminal {
            id,
            status: order.status,
        })?;
        debug!(order = id, from = %order.status, to = %next, "order advanced");
        order.status = next;
        Ok(next)
    }

    pub fn cancel(&mut self, id: u32) -> Result<(), OrderError> {
        let order = self.find_mut(id)?;
        if order.status.is_terminal() {
            return Err(OrderError::Terminal {
                id,
                status: order.status,
            });
        }
        debug!(order = id, from = %order.status, "order cancelled");
        order.status = OrderStatus::Cancelled;
        Ok(())
    }

    pub fn stats(&self) -> OrderStats {
        let mut stats = OrderStats {
            total: self.orders.len(),
            ..OrderStats::default()
        };
        for order in &self.orders {
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Preparing => stats.preparing += 1,
                OrderStatus::Ready => stats.ready += 1,
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Cancelled => stats.cancelled += 1,
            }
            if order.status != OrderStatus::Cancelled {
                stats.revenue_cents += order.total_cents();
            }
        }
        stats
    }

    fn find_mut(&mut self, id: u32) -> Result<&mut Order, OrderError> {
        self.orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(OrderError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    fn line(name: &str, quantity: u8, price: u32) -> OrderLine {
        OrderLine {
            item_id: name.to_lowercase(),
            name: name.to_string(),
            quantity,
            unit_price_cents: price,
        }
    }

    fn order(id: u32, customer: &str, status: OrderStatus, lines: Vec<OrderLine>) -> Order {
        Order {
            id,
            customer: customer.to_string(),
            lines,
            status,
            placed_minutes_ago: 5,
        }
    }

    fn book() -> OrderBook {
        OrderBook::new(vec![
            order(1, "Ana Lopez", OrderStatus::Pending, vec![line("Elote", 2, 550)]),
            order(2, "Ben Carter", OrderStatus::Ready, vec![line("Churros", 1, 650)]),
            order(
                3,
                "Carmen Diaz",
                OrderStatus::Cancelled,
                vec![line("Tacos al Pastor", 3, 1150)],
            ),
            order(
                4,
                "Dev Patel",
                OrderStatus::Delivered,
                vec![line("Elote", 1, 550), line("Horchata", 2, 395)],
            ),
        ])
    }

    #[test]
    fn generation_is_deterministic() {
        let menu = Content::builtin().unwrap().menu;
        let a = generate_orders(&menu, 12, 42);
        let b = generate_orders(&menu, 12, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        for o in &a {
            assert!(!o.lines.is_empty() && o.lines.len() <= 4);
            assert!((1001..1013).contains(&o.id));
        }
        assert!(a.windows(2).all(|w| w[0].placed_minutes_ago <= w[1].placed_minutes_ago));
    }

    #[test]
    fn empty_menu_yields_no_orders() {
        assert!(generate_orders(&[], 5, 1).is_empty());
    }

    #[test]
    fn totals() {
        let b = book();
        let o = b.get(4).unwrap();
        assert_eq!(o.total_cents(), 550 + 2 * 395);
        assert_eq!(o.item_count(), 3);
        assert_eq!(o.summary(), "1x Elote, 2x Horchata");
    }

    #[test]
    fn totals_do_not_overflow_on_large_prices() {
        let expensive = order(
            7,
            "Grace Kim",
            OrderStatus::Pending,
            vec![line("Gold Taco", 3, 4_000_000_000), line("Gold Taco", 2, u32::MAX)],
        );
        let expected = 3 * 4_000_000_000u64 + 2 * u64::from(u32::MAX);
        assert_eq!(expensive.total_cents(), expected);

        let stats = OrderBook::new(vec![expensive.clone(), expensive]).stats();
        assert_eq!(stats.revenue_cents, 2 * expected);
    }

    #[test]
    fn generated_orders_from_pricey_menu_total_safely() {
        let text = r#"
            [hero]
            title = "t"
            tagline = "t"
            call_to_action = "t"

            [[menu]]
            id = "gold"
            name = "Gold Taco"
            description = ""
            price_cents = 4000000000
            category = "tacos"
            featured = true
        "#;
        let menu = Content::parse(text, "test").unwrap().menu;
        let book = OrderBook::new(generate_orders(&menu, 3, 42));
        let stats = book.stats();
        let cancelled: u64 = book
            .orders()
            .iter()
            .filter(|o| o.status == OrderStatus::Cancelled)
            .map(Order::total_cents)
            .sum();
        let all: u64 = book.orders().iter().map(Order::total_cents).sum();
        assert_eq!(stats.revenue_cents, all - cancelled);
        assert!(all >= 3 * 4_000_000_000);
    }

    #[test]
    fn empty_filter_matches_all() {
        let b = book();
        assert_eq!(b.filtered(&OrderFilter::default()).count(), 4);
    }

    #[test]
    fn query_matches_customer_id_and_items() {
        let b = book();
        let by = |q: &str| {
            let f = OrderFilter {
                query: q.to_string(),
                status: None,
            };
            b.filtered(&f).map(|o| o.id).collect::<Vec<_>>()
        };
        assert_eq!(by("  ana "), vec![1]);
        assert_eq!(by("ELOTE"), vec![1, 4]);
        assert_eq!(by("#3"), vec![3]);
        assert!(by("burrito").is_empty());
    }

    #[test]
    fn status_and_query_combine() {
        let b = book();
        let f = OrderFilter {
            query: "elote".to_string(),
            status: Some(OrderStatus::Delivered),
        };
        assert_eq!(b.filtered(&f).map(|o| o.id).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn status_pipeline() {
        let mut b = book();
        assert_eq!(b.advance_status(1), Ok(OrderStatus::Preparing));
        assert_eq!(b.advance_status(1), Ok(OrderStatus::Ready));
        assert_eq!(b.advance_status(1), Ok(OrderStatus::Delivered));
        assert_eq!(
            b.advance_status(1),
            Err(OrderError::Terminal {
                id: 1,
                status: OrderStatus::Delivered
            })
        );
        assert_eq!(b.advance_status(99), Err(OrderError::NotFound(99)));
    }

    #[test]
    fn cancel_only_active_orders() {
        let mut b = book();
        assert_eq!(b.cancel(2), Ok(()));
        assert_eq!(b.get(2).unwrap().status, OrderStatus::Cancelled);
        assert!(b.cancel(4).is_err());
        assert!(b.cancel(2).is_err());
    }

    #[test]
    fn stats_count_and_revenue() {
        let s = book().stats();
        assert_eq!(s.total, 4);
        assert_eq!(s.pending, 1);
        assert_eq!(s.ready, 1);
        assert_eq!(s.delivered, 1);
        assert_eq!(s.cancelled, 1);
        assert_eq!(s.active(), 2);
        assert_eq!(s.count(OrderStatus::Cancelled), 1);
        assert_eq!(s.revenue_cents, 1100 + 650 + 550 + 790);
    }
}
