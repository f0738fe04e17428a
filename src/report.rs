//! Report output: run header plus one accumulated triangle per product

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use crate::claims::ClaimsPortfolio;
use crate::error::ClaimsError;
use crate::triangle;

/// Write the run report.
///
/// First line is the shared triangle dimensions,
/// `earliest origin year, greatest span`; then one line per product in
/// first-seen order holding the product name and its flattened accumulated
/// triangle. Every product uses the same base year and span, so all
/// triangles align row for row.
///
/// A portfolio with no ingested records produces no output at all (there is
/// no meaningful base year to report).
pub fn write_report<W: Write>(portfolio: &ClaimsPortfolio, writer: &mut W) -> io::Result<()> {
    let stats = portfolio.stats();
    let Some(base_year) = stats.earliest_origin_year() else {
        warn!("no payment records ingested, nothing to report");
        return Ok(());
    };
    let span = stats.greatest_span();

    writeln!(writer, "{base_year}, {span}")?;
    info!("wrote header: {base_year}, {span}");

    for (product, store) in portfolio.iter() {
        let accumulated = triangle::build(store, base_year, span).accumulate();
        writeln!(writer, "{product}, {accumulated}")?;
        info!("wrote accumulated triangle for product {product}");
    }

    Ok(())
}

/// Write the run report to a file.
///
/// Fails if the destination cannot be created; any in-memory results are
/// lost in that case, per the batch tool's fail-fast output boundary.
pub fn write_report_to_path<P: AsRef<Path>>(
    portfolio: &ClaimsPortfolio,
    path: P,
) -> Result<(), ClaimsError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ClaimsError::OutputOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_report(portfolio, &mut writer)?;
    writer.flush()?;

    Ok(())
}
