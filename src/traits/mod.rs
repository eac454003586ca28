//! Conversion and extension traits.
//!
//! - [`IntoErrorSource`]: the capability check that decides how a value is normalized
//! - [`FaultExt`]: wraps internal errors of a rule into a [`ValidationError`](crate::ValidationError)
//!
//! The [`Validator`](crate::Validator) and [`Rule`](crate::Rule) traits live in
//! [`crate::validator`] next to the validators built on them.
//!
//! # Examples
//!
//! ```
//! use validation_rail::traits::{FaultExt, IntoErrorSource};
//! use validation_rail::ErrorSource;
//!
//! let source: ErrorSource<String> = vec!["first", "second"].into_error_source();
//! assert_eq!(source.sequence().collect::<Vec<String>>(), ["first", "second"]);
//!
//! let fault = "12x".parse::<u8>().fault("bad byte").unwrap_err();
//! assert_eq!(fault.to_string(), "bad byte");
//! ```

pub mod into_error_source;
pub mod result_ext;

pub use into_error_source::IntoErrorSource;
pub use result_ext::FaultExt;
