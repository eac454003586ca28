//! Validation core: lazy error sequences, validators and failure carriers.
//!
//! A [`Validator`](validator::Validator) judges a subject and either accepts
//! it, rejects it with a [`ValidationFailed`] that lists what is wrong, or
//! faults with a [`ValidationError`] when it cannot decide. Error entries are
//! kept as [`ErrorSource`]s and only read when someone iterates them, so
//! combining many validators never forces their sources.
//!
//! # Examples
//!
//! ## Normalizing and aggregating error sources
//!
//! ```
//! use validation_rail::sequence::aggregate;
//! use validation_rail::{ErrorSource, Lazy};
//!
//! let merged: Vec<String> = aggregate([
//!     ErrorSource::single("name is required".to_string()),
//!     ErrorSource::ordered(vec!["email is invalid".to_string()]),
//!     Lazy::new(std::iter::once("age is negative".to_string())).into(),
//! ])
//! .collect();
//!
//! assert_eq!(merged, ["name is required", "email is invalid", "age is negative"]);
//! ```
//!
//! ## Combining validators
//!
//! ```
//! use validation_rail::validator::{rule_fn, CompositeValidator, Validator};
//!
//! let age = CompositeValidator::new()
//!     .named("age")
//!     .with(rule_fn("adult", |n: &u8| (*n < 18).then(|| "must be an adult".to_string())))
//!     .with(rule_fn("plausible", |n: &u8| (*n > 130).then(|| "is implausible".to_string())));
//!
//! assert!(age.is_valid(&42));
//!
//! let rejection = age.validate(&12).unwrap_err().into_rejection().unwrap();
//! assert_eq!(*rejection.subject(), 12);
//! assert_eq!(rejection.errors().collect::<Vec<_>>(), ["must be an adult"]);
//! ```
//!
//! ## Reporting
//!
//! ```
//! use validation_rail::{Failure, FailureKind, ValidationFailed};
//!
//! let failure: Failure<&str> = ValidationFailed::new("", "required").unwrap().with_validator("name").into();
//! let report = failure.report();
//!
//! assert_eq!(report.kind, FailureKind::Rejection);
//! assert_eq!(report.errors, ["required"]);
//! ```

/// Conversions between validation results and plain `Result`s
pub mod convert;
/// Macros for building faults and error sources
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Normalization and aggregation of error sources
pub mod sequence;
/// Conversion and extension traits
pub mod traits;
/// Error sources and failure carriers
pub mod types;
/// Validator trait, rules and combiners
pub mod validator;

pub use sequence::{aggregate, normalize, ErrorSequence};
pub use traits::{FaultExt, IntoErrorSource};
pub use types::{
    BoxError, ErrorEntry, ErrorSource, ErrorVec, Failure, FailureKind, FailureReport, Lazy,
    Rejections, SinglePass, ValidationError, ValidationFailed, ValidationResult, ValidatorId,
    DEFAULT_REJECTION_MESSAGE,
};
pub use validator::{CompositeValidator, FaultPolicy, Rule, Validator};
