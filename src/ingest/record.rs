//! Validated payment records and per-line validation

use std::str::FromStr;

use csv::StringRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One validated claims-payment line: which product was paid, the origin
/// year of the claim, the development year the payment landed in, and the
/// amount.
///
/// Records are not retained after ingestion; each one is folded straight
/// into its product's [`PaymentStore`](crate::claims::PaymentStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub product: String,
    pub origin_year: i32,
    pub development_year: i32,
    pub payment: f64,
}

/// Why a line was rejected.
///
/// Both variants have the same outcome (the line is discarded and the run
/// continues, with no portfolio or stats change); only the logged message
/// differs.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid format: expected 4 fields, found {0}")]
    FieldCount(usize),
    #[error("invalid {field} {value:?}")]
    Field { field: &'static str, value: String },
}

impl PaymentRecord {
    /// Validate one CSV record into a payment tuple.
    ///
    /// Field whitespace is expected to be trimmed by the reader. No semantic
    /// validation is applied beyond numeric coercion: year ordering and
    /// payment sign pass through as-is.
    pub fn from_csv(record: &StringRecord) -> Result<Self, RecordError> {
        if record.len() != 4 {
            return Err(RecordError::FieldCount(record.len()));
        }

        Ok(PaymentRecord {
            product: record[0].to_string(),
            origin_year: parse_field("origin year", &record[1])?,
            development_year: parse_field("development year", &record[2])?,
            payment: parse_field("payment", &record[3])?,
        })
    }
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, RecordError> {
    value.parse().map_err(|_| RecordError::Field {
        field,
        value: value.to_string(),
    })
}
