//! Error severity for the skip-and-report policy

use std::fmt;

/// The severity of an error, indicating whether the surrounding run may
/// continue.
///
/// - `Recoverable`: record the error as a diagnostic and keep processing the
///   remaining records or output documents
/// - `Fatal`: abort the operation that produced the error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// The run must stop at this error.
    ///
    /// Examples: ConfigInvalid, SnapshotInvalid, IoFailed on the input
    #[default]
    Fatal,

    /// The error affects a single record or output and the run continues.
    ///
    /// Examples: AdapterFailed for one module, MalformedFilter for one
    /// requirement
    Recoverable,
}

impl Severity {
    /// Check whether processing may continue past this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Severity::Recoverable)
    }

    /// Escalate to fatal, e.g. when a strict mode is enabled.
    ///
    /// Fatal severity is never downgraded.
    pub fn escalate(self) -> Self {
        Severity::Fatal
    }

    /// Get severity as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Recoverable => "recoverable",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
