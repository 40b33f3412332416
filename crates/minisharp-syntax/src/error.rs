//! Front-end error type shared by the Minisharp lexer, parser and driver.
//!
//! Static and dynamic diagnostics produced by the checker and the
//! interpreter are not errors in this sense: they never stop a pass and
//! live in their own crates. This type is for failures that leave no tree
//! to work with, such as an unexpected character or a missing `;`.
//!
//! # Examples
//!
//! ```rust
//! use minisharp_syntax::error::{error, Error, Result};
//!
//! fn parse_count(s: &str) -> Result<i64> {
//!     s.parse().map_err(|_| Error::new(format!("Invalid number: {}", s)))
//! }
//!
//! fn positive(s: &str) -> Result<i64> {
//!     let n = parse_count(s)?;
//!     if n < 0 {
//!         error("Number must be positive")
//!     } else {
//!         Ok(n)
//!     }
//! }
//!
//! assert_eq!(positive("3").unwrap(), 3);
//! assert!(positive("x").is_err());
//! ```

use std::fmt;

/// An error with an optional 1-based source location.
///
/// ```rust
/// use minisharp_syntax::Error;
///
/// let located = Error::with_span("Expected ';'", 3, 14);
/// assert_eq!(located.to_string(), "Expected ';' at 3:14");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// Human-readable error message
    pub msg: String,

    /// Optional line number in source file (1-based)
    pub line: Option<usize>,

    /// Optional column number in source file (1-based)
    pub col: Option<usize>,
}

impl Error {
    /// Creates an error without location information.
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            line: None,
            col: None,
        }
    }

    /// Creates an error pointing at `line:col`.
    pub fn with_span(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            msg: msg.into(),
            line: Some(line),
            col: Some(col),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(l), Some(c)) = (self.line, self.col) {
            write!(f, "{} at {}:{}", self.msg, l, c)
        } else {
            write!(f, "{}", self.msg)
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::new(s)
    }
}
impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::new(s)
    }
}

/// A specialized `Result` type for front-end operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for `Err(Error::new(msg))`.
pub fn error<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::new(msg))
}

/// Shorthand for `Err(Error::with_span(msg, line, col))`.
pub fn error_at<T>(line: usize, col: usize, msg: impl Into<String>) -> Result<T> {
    Err(Error::with_span(msg, line, col))
}
