//! Snapshot loading: the file-backed introspection adapter.
//!
//! A snapshot file is the JSON form of [`modviz_core::Snapshot`]. Loading is
//! tolerant at record granularity: each entry of `modules` / `services` is
//! decoded on its own, so one unreadable record becomes one collected
//! `AdapterFailed` diagnostic and the remaining records still load. Only a
//! structurally broken document (not JSON, sections of the wrong shape)
//! fails the whole load.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use modviz_core::{IntrospectReport, Introspector, ModuleRecord, ServiceRecord};
use modviz_error::{Error, Result};

/// Introspection adapter reading an already-introspected snapshot document.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Introspector for SnapshotFile {
    fn introspect(&self) -> Result<IntrospectReport> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            Error::from(e)
                .with_operation("snapshot::introspect")
                .with_context("path", self.path.display().to_string())
        })?;
        parse_snapshot(&raw)
    }
}

/// Parse a snapshot document, collecting per-record failures.
pub fn parse_snapshot(raw: &str) -> Result<IntrospectReport> {
    let root: Value = serde_json::from_str(raw).map_err(|e| {
        Error::snapshot_invalid("snapshot is not valid JSON")
            .with_operation("snapshot::parse")
            .set_source(e)
    })?;

    if !root.is_object() {
        return Err(
            Error::snapshot_invalid("snapshot root is not an object")
                .with_operation("snapshot::parse"),
        );
    }

    let mut report = IntrospectReport::default();

    for (index, entry) in section(&root, "modules")?.iter().enumerate() {
        match serde_json::from_value::<ModuleRecord>(entry.clone()) {
            Ok(module) => report.snapshot.modules.push(module),
            Err(e) => report.failures.push(record_failure("module", index, e)),
        }
    }

    for (index, entry) in section(&root, "services")?.iter().enumerate() {
        match serde_json::from_value::<ServiceRecord>(entry.clone()) {
            Ok(service) => report.snapshot.services.push(service),
            Err(e) => report.failures.push(record_failure("service", index, e)),
        }
    }

    Ok(report)
}

fn section<'v>(root: &'v Value, name: &'static str) -> Result<&'v [Value]> {
    match root.get(name) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(entries)) => Ok(entries),
        Some(_) => Err(
            Error::snapshot_invalid(format!("'{name}' is not an array"))
                .with_operation("snapshot::parse"),
        ),
    }
}

fn record_failure(what: &'static str, index: usize, source: serde_json::Error) -> Error {
    Error::adapter_failed(format!("{what} record {index} could not be enumerated"))
        .with_operation("snapshot::parse")
        .with_context("record", index.to_string())
        .set_source(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use modviz_error::ErrorKind;

    #[test]
    fn test_parse_full_snapshot() {
        let report = parse_snapshot(
            r#"{
                "modules": [
                    {"id": 1, "symbolic_name": "com.a",
                     "exports": [{"package": "com.a.api"}],
                     "requirements": [{"filter": "(osgi.wiring.package=com.b.api)"}, {}]}
                ],
                "services": [
                    {"provider": 1, "object_classes": ["com.a.api.Greeter"], "using_modules": [2]}
                ]
            }"#,
        )
        .unwrap();

        assert!(report.failures.is_empty());
        assert_eq!(report.snapshot.modules.len(), 1);
        assert_eq!(report.snapshot.modules[0].exports[0].package, "com.a.api");
        assert_eq!(report.snapshot.modules[0].requirements[1].filter, None);
        assert_eq!(report.snapshot.services[0].using_modules, vec![2]);
    }

    #[test]
    fn test_bad_record_is_collected_not_fatal() {
        let report = parse_snapshot(
            r#"{
                "modules": [
                    {"id": 1, "symbolic_name": "com.a"},
                    {"symbolic_name": "missing-id"},
                    {"id": 3, "symbolic_name": "com.c"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(report.snapshot.modules.len(), 2);
        assert_eq!(report.snapshot.modules[1].id, 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].kind(), ErrorKind::AdapterFailed);
        assert!(report.failures[0].is_recoverable());
    }

    #[test]
    fn test_broken_document_is_fatal() {
        let err = parse_snapshot("not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SnapshotInvalid);

        let err = parse_snapshot(r#"{"modules": 7}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SnapshotInvalid);
    }

    #[test]
    fn test_missing_file() {
        let adapter = SnapshotFile::new("/nonexistent/snapshot.json");
        let err = adapter.introspect().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }
}
