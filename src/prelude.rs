//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use validation_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`errors!`], [`fault!`]
//! - **Types**: [`ErrorSource`], [`Lazy`], [`SinglePass`], [`ValidationError`],
//!   [`ValidationFailed`], [`Failure`], [`CompositeValidator`], [`FaultPolicy`]
//! - **Traits**: [`Validator`], [`Rule`], [`IntoErrorSource`], [`FaultExt`]
//!
//! # Examples
//!
//! ```
//! use validation_rail::prelude::*;
//!
//! fn username() -> CompositeValidator<String> {
//!     CompositeValidator::new()
//!         .named("username")
//!         .with(rule_fn("not_empty", |s: &String| s.is_empty().then(|| "required".to_string())))
//!         .with(rule_fn("lowercase", |s: &String| {
//!             (s.to_lowercase() != *s).then(|| "must be lowercase".to_string())
//!         }))
//! }
//!
//! assert!(username().is_valid(&"ferris".to_string()));
//! assert!(!username().is_valid(&"Ferris".to_string()));
//! ```

// Macros
pub use crate::{errors, fault};

// Core types
pub use crate::types::{
    ErrorSource, Failure, Lazy, SinglePass, ValidationError, ValidationFailed, ValidationResult,
};
pub use crate::validator::{rule_fn, try_rule_fn, CompositeValidator, FaultPolicy};

// Traits
pub use crate::traits::{FaultExt, IntoErrorSource};
pub use crate::validator::{Rule, Validator};
