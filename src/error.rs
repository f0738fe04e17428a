//! Fatal error taxonomy
//!
//! Only the two I/O boundaries can abort a run. Data-quality problems never
//! show up here: malformed lines are discarded with a warning during
//! ingestion and the run continues.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("could not open input file {path:?}")]
    InputOpen { path: PathBuf, source: io::Error },

    #[error("could not create output file {path:?}")]
    OutputOpen { path: PathBuf, source: io::Error },

    #[error("failed writing report")]
    OutputWrite(#[from] io::Error),
}
