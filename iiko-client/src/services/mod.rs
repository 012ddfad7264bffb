//! Workflows composed from several endpoint calls

pub mod price_order;

pub use price_order::PriceOrderService;
