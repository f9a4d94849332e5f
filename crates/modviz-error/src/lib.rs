//! # modviz-error
//!
//! Unified error handling for modviz.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., MalformedFilter, AdapterFailed)
//! - **Severity**: Decide whether the run continues (Recoverable, Fatal)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use modviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::MalformedFilter, "no package clause")
//!         .with_operation("filter::parse")
//!         .with_context("module", "m.2")
//!         .with_context("filter", "(version>=1.0)"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All functions return `Result<T, modviz_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage

mod error;
mod kind;
mod severity;

pub use error::Error;
pub use kind::ErrorKind;
pub use severity::Severity;

/// Result type alias using modviz Error
pub type Result<T> = std::result::Result<T, Error>;
