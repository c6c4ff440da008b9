//! Error types for bizdays.
//!
//! Everything that can go wrong is collapsed into a single `thiserror`-derived
//! enum.  The `ensure!` and `fail!` macros are shorthands for the common
//! "check a precondition, bail out with a message" pattern.
//!
//! Two families matter to callers:
//!
//! * [`Error::Validation`] marks a degenerate query (e.g. an empty or reversed
//!   date range).  Counting functions recover from it by returning zero.
//! * [`Error::Configuration`] and [`Error::UnsupportedRule`] mark a defective
//!   holiday definition.  These are always propagated.

use thiserror::Error;

/// The top-level error type used throughout bizdays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// A query that has no meaningful answer, such as `start >= end`.
    #[error("validation error: {0}")]
    Validation(String),

    /// A holiday rule with out-of-range fields, or one that cannot be turned
    /// into a calendar date for some year.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A holiday rule record carrying a tag no rule variant understands.
    #[error("unsupported holiday rule type '{0}'")]
    UnsupportedRule(String),
}

impl Error {
    /// Return `true` if the error stems from holiday-rule configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_) | Error::UnsupportedRule(_))
    }
}

/// Shorthand `Result` type used throughout bizdays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bd_core::{ensure, errors::Error};
/// fn positive(x: i32) -> bd_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use bd_core::{fail, errors::Error};
/// fn always_err() -> bd_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
