//! Error kinds for modviz operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide how to react to a failure; the
/// build pipeline in particular distinguishes kinds that are collected as
/// diagnostics from kinds that abort the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid configuration or parameters
    ConfigInvalid,

    /// Invalid argument passed to a function
    InvalidArgument,

    // =========================================================================
    // Introspection errors
    // =========================================================================
    /// The introspection boundary could not enumerate a module or service
    AdapterFailed,

    /// A snapshot document is structurally invalid
    SnapshotInvalid,

    // =========================================================================
    // Wiring filter errors
    // =========================================================================
    /// A requirement's filter expression has no recognizable package clause
    MalformedFilter,

    // =========================================================================
    // Graph errors
    // =========================================================================
    /// Graph construction failed
    GraphBuildFailed,

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// Rendering a graph to an output document failed
    SerializationFailed,

    /// Parsing an output document back into a graph failed
    DeserializationFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if the build pipeline may record this kind and keep going.
    ///
    /// Recoverable kinds follow the skip-and-report policy: the offending
    /// record is dropped, a diagnostic is collected, and the remaining
    /// records are still processed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorKind::AdapterFailed | ErrorKind::MalformedFilter)
    }
}
