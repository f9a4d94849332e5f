//! Core processing pipeline: load snapshot → build views → write documents.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, warn};

use modviz_core::{BuildOptions, BuildStats, Introspector, build_views};
use modviz_error::{Error, Result};

use crate::ModvizOptions;
use crate::output::write_view_documents;
use crate::snapshot::SnapshotFile;

/// What a run produced, for reporting.
#[derive(Debug)]
pub struct RunSummary {
    pub stats: BuildStats,
    /// Output documents written, in view order.
    pub written: Vec<PathBuf>,
    /// Collected recoverable failures: adapter records that could not be
    /// enumerated, malformed requirement filters, documents that failed to
    /// write.
    pub diagnostics: Vec<Error>,
}

/// Run the whole pipeline for one snapshot.
///
/// 1. Introspect the snapshot file into normalized records
/// 2. Build the four graph views in one pass
/// 3. Render and write one JSON document per view
pub fn process_snapshot(opts: &ModvizOptions) -> Result<RunSummary> {
    let load_start = Instant::now();
    let report = SnapshotFile::new(&opts.snapshot).introspect()?;
    info!(
        "Snapshot load: {:.2}s ({} modules, {} services)",
        load_start.elapsed().as_secs_f64(),
        report.snapshot.modules.len(),
        report.snapshot.services.len()
    );

    let build_start = Instant::now();
    let mut build_options = BuildOptions::new()
        .with_strict_filters(opts.strict_filters)
        .with_fail_on_malformed(opts.fail_on_malformed);
    if let Some(attribute) = &opts.package_attribute {
        build_options = build_options.with_package_attribute(attribute);
    }
    let output = build_views(&report.snapshot, &build_options)?;
    info!(
        "Graph building: {:.2}s ({} modules, {} service definitions)",
        build_start.elapsed().as_secs_f64(),
        output.stats.module_count,
        output.stats.service_definition_count
    );

    let write_start = Instant::now();
    let (written, write_failures) = write_view_documents(&output.views, &opts.out_dir)?;
    info!(
        "Document writing: {:.2}s ({} documents)",
        write_start.elapsed().as_secs_f64(),
        written.len()
    );

    let mut diagnostics = report.failures;
    diagnostics.extend(output.diagnostics);
    diagnostics.extend(write_failures);
    for diagnostic in &diagnostics {
        warn!(%diagnostic, "recoverable failure");
    }

    Ok(RunSummary {
        stats: output.stats,
        written,
        diagnostics,
    })
}
