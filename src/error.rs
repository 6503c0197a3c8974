//! Error types for the Kensaku library.
//!
//! All fallible operations in Kensaku return [`Result`], whose error type is
//! the [`KensakuError`] enum.
//!
//! # Examples
//!
//! ```
//! use kensaku::error::{KensakuError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KensakuError::analysis("could not expand token"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Kensaku operations.
///
/// This enum represents all errors the library can produce. It uses the
/// `thiserror` crate for the `Error` trait implementation and provides
/// convenient constructor methods for the common variants.
///
/// The public mutating API of the search engine is infallible: analysis
/// errors are recoverable and are logged and skipped per token rather than
/// surfaced to the caller.
#[derive(Error, Debug)]
pub enum KensakuError {
    /// Analysis-related errors (tokenization, filtering, expansion).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Index-related errors.
    #[error("Index error: {0}")]
    Index(String),

    /// Query-related errors.
    #[error("Query error: {0}")]
    Query(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`KensakuError`].
pub type Result<T> = std::result::Result<T, KensakuError>;

impl KensakuError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KensakuError::Analysis(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        KensakuError::Index(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        KensakuError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KensakuError::Other(msg.into())
    }
}
