//! Claims Triangle - cumulative loss-development triangles from claims payments
//!
//! This library provides:
//! - Per-product sparse payment storage with last-write-wins semantics
//! - Dense triangle materialization over a run-wide base year and span
//! - Row-wise cumulative accumulation of payment triangles
//! - CSV ingestion with skip-and-continue line validation
//! - Flat delimited report output (one accumulated triangle per product)

pub mod claims;
pub mod error;
pub mod ingest;
pub mod report;
pub mod triangle;

// Re-export commonly used types
pub use claims::{ClaimsPortfolio, PaymentStore};
pub use error::ClaimsError;
pub use ingest::{PaymentRecord, RunStats};
pub use triangle::Triangle;
