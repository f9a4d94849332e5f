//! Wiring filter parsing.
//!
//! A requirement carries an opaque boolean filter expression such as
//! `(&(osgi.wiring.package=com.a.api)(version>=1.0))`. The builder only
//! needs the package name out of it, so parsing is a narrow heuristic: take
//! the first `attribute=<name>` clause and cut it at the closing parenthesis.
//! Filters expressing several package clauses keep only the first one by
//! default; [`FilterParser::with_strict`] opts into rejecting them instead.

use std::sync::LazyLock;

use modviz_error::{Error, ErrorKind, Result};
use regex::Regex;

/// Attribute key naming the required package in wiring filters.
pub const PACKAGE_ATTRIBUTE: &str = "osgi.wiring.package";

static DEFAULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&clause_pattern(PACKAGE_ATTRIBUTE)).expect("default package attribute pattern")
});

fn clause_pattern(attribute: &str) -> String {
    format!("{}=([^)]*)", regex::escape(attribute))
}

/// Extracts package names from requirement filter expressions.
#[derive(Debug, Clone)]
pub struct FilterParser {
    pattern: Regex,
    strict: bool,
}

impl FilterParser {
    /// Parser for the standard package attribute key.
    pub fn new() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
            strict: false,
        }
    }

    /// Parser for a custom attribute key, for component systems with a
    /// different wiring namespace.
    pub fn with_attribute(attribute: &str) -> Result<Self> {
        if attribute.is_empty() {
            return Err(Error::config_invalid("package attribute key is empty")
                .with_operation("filter::with_attribute"));
        }
        let pattern = Regex::new(&clause_pattern(attribute)).map_err(|e| {
            Error::config_invalid(format!("invalid package attribute key '{attribute}'"))
                .with_operation("filter::with_attribute")
                .set_source(e)
        })?;
        Ok(Self {
            pattern,
            strict: false,
        })
    }

    /// Reject filters containing more than one package clause instead of
    /// keeping the first.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Extract the package name from a filter expression.
    ///
    /// Returns the substring between the first package clause's `=` and its
    /// terminating `)`. Fails with `MalformedFilter` when no clause is
    /// present, or (strict only) when several are.
    pub fn parse<'f>(&self, filter: &'f str) -> Result<&'f str> {
        let mut clauses = self.pattern.captures_iter(filter);

        let Some(first) = clauses.next() else {
            return Err(Error::malformed_filter(filter).with_operation("filter::parse"));
        };

        if self.strict && clauses.next().is_some() {
            return Err(Error::new(
                ErrorKind::MalformedFilter,
                format!("multiple package clauses in filter '{filter}'"),
            )
            .with_context("filter", filter)
            .with_operation("filter::parse"));
        }

        let Some(name) = first.get(1) else {
            return Err(Error::malformed_filter(filter).with_operation("filter::parse"));
        };
        Ok(name.as_str())
    }
}

impl Default for FilterParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_clause() {
        let parser = FilterParser::new();
        let name = parser.parse("(osgi.wiring.package=com.a.api)").unwrap();
        assert_eq!(name, "com.a.api");
    }

    #[test]
    fn test_parse_anded_version_clause() {
        let parser = FilterParser::new();
        let name = parser
            .parse("(&(osgi.wiring.package=com.a.api)(version>=1.0)(!(version>=2.0)))")
            .unwrap();
        assert_eq!(name, "com.a.api");
    }

    #[test]
    fn test_parse_missing_clause() {
        let parser = FilterParser::new();
        let err = parser.parse("(version>=1.0)").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedFilter);
        assert!(err.is_recoverable());
        assert!(err.message().contains("(version>=1.0)"));
    }

    #[test]
    fn test_first_clause_wins_by_default() {
        let parser = FilterParser::new();
        let name = parser
            .parse("(|(osgi.wiring.package=com.a.api)(osgi.wiring.package=com.b.api))")
            .unwrap();
        assert_eq!(name, "com.a.api");
    }

    #[test]
    fn test_strict_rejects_multiple_clauses() {
        let parser = FilterParser::new().with_strict(true);

        let name = parser.parse("(osgi.wiring.package=com.a.api)").unwrap();
        assert_eq!(name, "com.a.api");

        let err = parser
            .parse("(|(osgi.wiring.package=com.a.api)(osgi.wiring.package=com.b.api))")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedFilter);
        assert!(err.message().contains("multiple package clauses"));
    }

    #[test]
    fn test_custom_attribute_key() {
        let parser = FilterParser::with_attribute("module.package").unwrap();
        let name = parser.parse("(&(module.package=core.io)(rank>=5))").unwrap();
        assert_eq!(name, "core.io");

        // the standard key is not recognized by a custom parser
        assert!(parser.parse("(osgi.wiring.package=com.a.api)").is_err());
    }

    #[test]
    fn test_empty_attribute_key_rejected() {
        let err = FilterParser::with_attribute("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_empty_package_name_is_preserved() {
        // matches the legacy first-match substring behavior
        let parser = FilterParser::new();
        assert_eq!(parser.parse("(osgi.wiring.package=)").unwrap(), "");
    }
}
