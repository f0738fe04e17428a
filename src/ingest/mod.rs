//! CSV ingestion: per-line validation with skip-and-continue semantics

pub mod loader;
mod record;
mod stats;

pub use loader::{load_from_path, load_from_reader};
pub use record::{PaymentRecord, RecordError};
pub use stats::RunStats;
