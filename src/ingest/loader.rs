//! Load claims-payment records from CSV input

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};

use crate::claims::ClaimsPortfolio;
use crate::error::ClaimsError;
use crate::ingest::PaymentRecord;

/// Fold claims-payment CSV lines from any reader into a portfolio.
///
/// Lines are `product, origin year, development year, payment` with no
/// header row. Malformed lines (wrong field count, non-numeric fields, or
/// unreadable records) are discarded with a warning and never leave partial
/// state behind; they cannot abort the run.
pub fn load_from_reader<R: Read>(reader: R) -> ClaimsPortfolio {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut portfolio = ClaimsPortfolio::new();

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!("unreadable record, discarding: {err}");
                continue;
            }
        };

        match PaymentRecord::from_csv(&record) {
            Ok(payment) => {
                info!(
                    "loaded payment of {} from origin year {} and development year {} for product {}",
                    payment.payment, payment.origin_year, payment.development_year, payment.product
                );
                portfolio.add(&payment);
            }
            Err(err) => {
                warn!("{err}, discarding line: \"{}\"", display_line(&record));
            }
        }
    }

    portfolio
}

/// Load a portfolio from a CSV file.
///
/// Fails only if the file cannot be opened; everything past that point is
/// skip-and-continue.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<ClaimsPortfolio, ClaimsError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ClaimsError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(load_from_reader(file))
}

fn display_line(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
