//! The main Error type for modviz.

use crate::{ErrorKind, Severity};
use std::fmt;

/// Unified error type for all modviz operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    severity: Severity,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let severity = if kind.is_recoverable() {
            Severity::Recoverable
        } else {
            Severity::Fatal
        };

        Self {
            kind,
            message: message.into(),
            severity,
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the error severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Set the error severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Escalate a recoverable error to fatal (strict modes)
    pub fn escalate(mut self) -> Self {
        self.severity = self.severity.escalate();
        self
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }

    /// Check if processing may continue past this error
    pub fn is_recoverable(&self) -> bool {
        self.severity.is_recoverable()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {}", self.kind, self.severity, self.operation)?;

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) at {}", self.kind, self.severity, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::new(ErrorKind::Unexpected, msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::new(ErrorKind::Unexpected, msg)
    }
}

impl Error {
    /// Create an Unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create a ConfigInvalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create an AdapterFailed error
    pub fn adapter_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AdapterFailed, message)
    }

    /// Create a SnapshotInvalid error
    pub fn snapshot_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SnapshotInvalid, message)
    }

    /// Create a MalformedFilter error carrying the raw filter text
    pub fn malformed_filter(filter: impl Into<String>) -> Self {
        let filter = filter.into();
        Self::new(
            ErrorKind::MalformedFilter,
            format!("no package clause in filter '{}'", filter),
        )
        .with_context("filter", filter)
    }

    /// Create a GraphBuildFailed error
    pub fn graph_build_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::GraphBuildFailed, message)
    }

    /// Create a SerializationFailed error
    pub fn serialization_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationFailed, message)
    }

    /// Create a DeserializationFailed error
    pub fn deserialization_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DeserializationFailed, message)
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorKind::FileNotFound,
            format!("file '{}' not found", path),
        )
        .with_context("path", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::SnapshotInvalid, "modules is not an array");
        assert_eq!(err.kind(), ErrorKind::SnapshotInvalid);
        assert_eq!(err.message(), "modules is not an array");
        assert_eq!(err.severity(), Severity::Fatal);
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::MalformedFilter, "no package clause")
            .with_operation("filter::parse")
            .with_context("module", "m.2")
            .with_context("filter", "(version>=1.0)");

        assert_eq!(err.operation(), "filter::parse");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("module", "m.2".to_string()));
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::GraphBuildFailed, "failed")
            .with_operation("filter::parse")
            .with_operation("graph_builder::build_views");

        assert_eq!(err.operation(), "graph_builder::build_views");
        assert_eq!(err.context().len(), 1);
        assert_eq!(err.context()[0], ("called", "filter::parse".to_string()));
    }

    #[test]
    fn test_default_severity() {
        let err = Error::new(ErrorKind::MalformedFilter, "no package clause");
        assert!(err.is_recoverable()); // MalformedFilter defaults to recoverable

        let err = Error::new(ErrorKind::SerializationFailed, "bad document");
        assert!(!err.is_recoverable()); // SerializationFailed defaults to fatal
    }

    #[test]
    fn test_escalate() {
        let err = Error::new(ErrorKind::MalformedFilter, "no package clause");
        assert!(err.is_recoverable());

        let err = err.escalate();
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), Severity::Fatal);
    }

    #[test]
    fn test_display() {
        let err = Error::malformed_filter("(version>=1.0)")
            .with_operation("filter::parse")
            .with_context("module", "m.2");

        let display = format!("{}", err);
        assert!(display.contains("MalformedFilter"));
        assert!(display.contains("recoverable"));
        assert!(display.contains("filter::parse"));
        assert!(display.contains("module: m.2"));
    }

    #[test]
    fn test_convenience_constructors() {
        let err = Error::malformed_filter("(&(a=b))");
        assert_eq!(err.kind(), ErrorKind::MalformedFilter);
        assert!(err.message().contains("(&(a=b))"));

        let err = Error::file_not_found("snapshot.json");
        assert_eq!(err.kind(), ErrorKind::FileNotFound);

        let err = Error::adapter_failed("module 7 failed to activate");
        assert_eq!(err.kind(), ErrorKind::AdapterFailed);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_set_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::snapshot_invalid("snapshot is not valid JSON").set_source(json_err);

        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(err.source_ref().is_some());
    }
}
