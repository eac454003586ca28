//! Shorthand macros for building failures and error sources.
//!
//! - [`macro@crate::fault`] - Builds a [`ValidationError`](crate::ValidationError) with a
//!   `format!`-style message.
//! - [`macro@crate::errors`] - Builds an ordered [`ErrorSource`](crate::ErrorSource) from a
//!   list of entries, converting each with `Into`.
//!
//! # Examples
//!
//! ```
//! use validation_rail::{errors, fault, ErrorSource};
//!
//! let table = "countries";
//! let err = fault!("lookup table {} unavailable", table).set_code(503);
//! assert_eq!(err.to_string(), "lookup table countries unavailable (code: 503)");
//!
//! let source: ErrorSource<String> = errors!["too short", "not unique"];
//! assert_eq!(source.sequence().count(), 2);
//! ```

/// Creates a [`ValidationError`](crate::ValidationError) whose message is built like `format!`.
///
/// # Examples
///
/// ```
/// use validation_rail::fault;
///
/// let field = "email";
/// let err = fault!("cannot resolve field {field}");
/// assert_eq!(err.message(), "cannot resolve field email");
/// ```
#[macro_export]
macro_rules! fault {
    ($($arg:tt)+) => {
        $crate::ValidationError::new(::std::format!($($arg)+))
    };
}

/// Creates an ordered [`ErrorSource`](crate::ErrorSource), converting each entry with `Into`.
///
/// # Examples
///
/// ```
/// use validation_rail::{errors, ErrorSource};
///
/// let source: ErrorSource<String> = errors!["missing name", String::from("missing email")];
/// let entries: Vec<String> = source.sequence().collect();
/// assert_eq!(entries, ["missing name", "missing email"]);
///
/// let none: ErrorSource<String> = errors![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! errors {
    () => {
        $crate::ErrorSource::empty()
    };
    ($($entry:expr),+ $(,)?) => {
        $crate::ErrorSource::ordered([$(::core::convert::Into::into($entry)),+])
    };
}

/// Emits a `tracing` event when the `tracing` feature is on; expands to nothing otherwise.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    }};
}

pub(crate) use log_event;
