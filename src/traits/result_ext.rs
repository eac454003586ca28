//! Extension trait for turning internal errors into process faults.
//!
//! Rules sometimes need fallible work of their own (parsing, lookups) before
//! they can decide anything about a subject. [`FaultExt`] wraps such errors in
//! a [`ValidationError`] that keeps the original as its cause, without verbose
//! `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use validation_rail::traits::FaultExt;
//! use validation_rail::ValidationError;
//!
//! fn parse_limit(raw: &str) -> Result<u32, ValidationError> {
//!     raw.parse::<u32>().fault("limit is not a number")
//! }
//!
//! let fault = parse_limit("ten").unwrap_err();
//! assert_eq!(fault.message(), "limit is not a number");
//! assert!(fault.cause().is_some());
//! ```
use std::borrow::Cow;

use crate::types::{BoxError, ValidationError};

/// Extension trait converting `Result` errors into [`ValidationError`] faults.
pub trait FaultExt<T> {
    /// Wraps the error in a fault with a fixed message.
    fn fault<M>(self, message: M) -> Result<T, ValidationError>
    where
        M: Into<Cow<'static, str>>;

    /// Wraps the error in a fault whose message is only built on the error path.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::traits::FaultExt;
    ///
    /// let key = "limits.max";
    /// let result: Result<u32, std::num::ParseIntError> = "x".parse::<u32>();
    /// let fault = result.fault_with(|| format!("reading {key}")).unwrap_err();
    /// assert_eq!(fault.message(), "reading limits.max");
    /// ```
    fn fault_with<F>(self, f: F) -> Result<T, ValidationError>
    where
        F: FnOnce() -> String;
}

impl<T, Err> FaultExt<T> for Result<T, Err>
where
    Err: Into<BoxError>,
{
    #[inline]
    fn fault<M>(self, message: M) -> Result<T, ValidationError>
    where
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|e| ValidationError::new(message).with_cause(e))
    }

    #[inline]
    fn fault_with<F>(self, f: F) -> Result<T, ValidationError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ValidationError::new(f()).with_cause(e))
    }
}
