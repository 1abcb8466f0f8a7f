//! Application services for the storefront.

pub mod orders;

pub use orders::OrderLog;
