//! Error types for array parsing and field conversion.
//!
//! The tokenizer itself is deliberately permissive and accepts any string
//! input, so most errors surface at the field-adapter boundary: a form
//! submission that cannot be parsed into tokens, or a value whose nesting
//! does not match the declared column dimension.
//!
//! ## Examples
//!
//! ```rust
//! use pg_textarray::Error;
//!
//! let err = Error::MalformedInput;
//! assert!(err.to_string().contains("comma-separated"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors from parsing and field conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A submitted string could not be parsed into a token list.
    ///
    /// The message is user-facing and suitable for form validation output.
    #[error("please provide a comma-separated list of values")]
    MalformedInput,

    /// A value's nesting depth does not match the field's declared dimension.
    #[error("dimension mismatch: field is declared {expected}-dimensional, value is {found}-dimensional")]
    DimensionMismatch { expected: usize, found: usize },

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a dimension mismatch error for a value that nests deeper
    /// (or shallower) than the field's declared dimension.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pg_textarray::Error;
    ///
    /// let err = Error::dimension_mismatch(1, 2);
    /// assert!(err.to_string().contains("1-dimensional"));
    /// ```
    pub fn dimension_mismatch(expected: usize, found: usize) -> Self {
        Error::DimensionMismatch { expected, found }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
