//! Error sources and the two failure carriers.
//!
//! This module holds the data side of the crate: the [`ErrorSource`] handle
//! that stores error entries without reading them, and the carriers a
//! validator fails with.
//!
//! # Examples
//!
//! ```
//! use validation_rail::{Failure, ValidationFailed};
//!
//! let rejection = ValidationFailed::<_, String>::new(17, vec!["must be even", "must be below 10"])
//!     .unwrap()
//!     .with_validator("bounds")
//!     .set_code(422);
//!
//! let failure: Failure<i32> = rejection.into();
//! assert_eq!(failure.to_string(), "[bounds] Validation failed (code: 422)");
//! ```
use smallvec::SmallVec;

pub mod error_source;
pub mod failure;
pub mod lazy_source;
pub mod rejections;
pub mod report;
pub mod validation_error;
pub mod validation_failed;
pub mod validator_id;

pub use error_source::{ErrorEntry, ErrorSource};
pub use failure::{Failure, ValidationResult};
pub use lazy_source::{Lazy, SinglePass};
pub use rejections::Rejections;
pub use report::{FailureKind, FailureReport};
pub use validation_error::ValidationError;
pub use validation_failed::{ValidationFailed, DEFAULT_REJECTION_MESSAGE};
pub use validator_id::ValidatorId;

/// SmallVec-backed collection used for ordered error entries.
///
/// Uses inline storage for one element, the common case of a rule that
/// reports a single problem.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Type-erased error kept as the cause of a failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
