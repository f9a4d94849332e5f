//! modviz command-line interface.
//!
pub mod output;
pub mod pipeline;
pub mod snapshot;

use std::path::PathBuf;

use modviz_error::Result;

pub use pipeline::{RunSummary, process_snapshot};
pub use snapshot::{SnapshotFile, parse_snapshot};

/// Options for running modviz.
#[derive(Debug, Clone)]
pub struct ModvizOptions {
    /// Snapshot JSON file describing the component system.
    pub snapshot: PathBuf,
    /// Directory receiving the four view documents.
    pub out_dir: PathBuf,
    /// Reject multi-clause requirement filters.
    pub strict_filters: bool,
    /// Abort on the first malformed requirement filter.
    pub fail_on_malformed: bool,
    /// Override of the wiring attribute key naming required packages.
    pub package_attribute: Option<String>,
}

/// Main entry point
pub fn run_main(opts: &ModvizOptions) -> Result<RunSummary> {
    process_snapshot(opts)
}
