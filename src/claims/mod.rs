//! Per-product payment storage and run-level aggregation

mod portfolio;
mod store;

pub use portfolio::ClaimsPortfolio;
pub use store::PaymentStore;
