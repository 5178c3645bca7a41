pub mod engine;

pub use engine::DashboardScreen;
