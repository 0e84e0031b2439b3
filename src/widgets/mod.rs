// Виджеты панели статуса
pub mod gauge;
pub mod node;

pub use gauge::Gauge;
