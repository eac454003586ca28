//! Validators: things that judge a subject.
//!
//! A [`Validator`] either accepts a subject (`Ok(())`), rejects it with a
//! [`ValidationFailed`] listing why, or faults with a [`ValidationError`]
//! when it cannot decide.
//!
//! - [`Rule`] is the lightweight form: compute an error source, and an empty
//!   one means the subject is valid. Adapt it with [`RuleValidator`] or build
//!   one from a closure with [`rule_fn`].
//! - [`CompositeValidator`] runs several validators and merges every
//!   rejection into one.
//!
//! # Examples
//!
//! ```
//! use validation_rail::validator::{rule_fn, CompositeValidator, Validator};
//!
//! let password = CompositeValidator::new()
//!     .named("password")
//!     .with(rule_fn("length", |p: &String| {
//!         if p.len() < 8 { vec!["at least 8 characters".to_string()] } else { vec![] }
//!     }))
//!     .with(rule_fn("digit", |p: &String| {
//!         (!p.chars().any(|c| c.is_ascii_digit())).then(|| "at least one digit".to_string())
//!     }));
//!
//! let failure = password.validate(&"hunter".to_string()).unwrap_err();
//! let errors: Vec<String> = failure.into_rejection().unwrap().errors().collect();
//! assert_eq!(errors, ["at least 8 characters", "at least one digit"]);
//! ```
use std::borrow::Cow;
use std::sync::Arc;

use crate::traits::IntoErrorSource;
use crate::types::{ErrorEntry, Failure, ValidationError, ValidationFailed, ValidationResult, ValidatorId};

pub mod composite;
pub mod rule;

pub use composite::{BoxedValidator, CompositeValidator, FaultPolicy};
pub use rule::{rule_fn, try_rule_fn, Rule, RuleFn, RuleValidator};

/// Judges subjects of type `S`, explaining rejections with entries of type `E`.
///
/// Implementations must not modify the subject. A rejection carries its own
/// copy of the subject, so implementors usually need `S: Clone`.
///
/// # Examples
///
/// ```
/// use validation_rail::validator::Validator;
/// use validation_rail::ValidationResult;
///
/// struct NonZero;
///
/// impl Validator<i64> for NonZero {
///     fn validate(&self, subject: &i64) -> ValidationResult<i64> {
///         if *subject == 0 {
///             return Err(self.reject(*subject, "must not be zero"));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(NonZero.is_valid(&3));
/// let failure = NonZero.validate(&0).unwrap_err();
/// assert!(failure.validator().unwrap().name().ends_with("NonZero"));
/// ```
pub trait Validator<S, E = String> {
    /// Accepts, rejects or faults on `subject`.
    fn validate(&self, subject: &S) -> ValidationResult<S, E>;

    /// Identity recorded on the failures this validator raises.
    ///
    /// Defaults to the implementing type name.
    fn id(&self) -> ValidatorId {
        ValidatorId::of::<Self>()
    }

    /// Returns `true` only if `subject` is accepted. Faults count as not valid.
    fn is_valid(&self, subject: &S) -> bool {
        self.validate(subject).is_ok()
    }

    /// Builds a rejection of `subject` stamped with this validator's id.
    ///
    /// An empty error source cannot explain a rejection, so it yields a fault
    /// instead.
    fn reject<V>(&self, subject: S, errors: V) -> Failure<S, E>
    where
        Self: Sized,
        E: ErrorEntry,
        V: IntoErrorSource<E>,
    {
        match ValidationFailed::new(subject, errors) {
            Ok(rejection) => rejection.with_validator(self.id()).into(),
            Err(fault) => fault.with_validator(self.id()).into(),
        }
    }

    /// Builds a fault stamped with this validator's id.
    fn fault<M>(&self, message: M) -> ValidationError
    where
        Self: Sized,
        M: Into<Cow<'static, str>>,
    {
        ValidationError::new(message).with_validator(self.id())
    }
}

impl<S, E, V> Validator<S, E> for &V
where
    V: Validator<S, E> + ?Sized,
{
    #[inline]
    fn validate(&self, subject: &S) -> ValidationResult<S, E> {
        (**self).validate(subject)
    }

    #[inline]
    fn id(&self) -> ValidatorId {
        (**self).id()
    }
}

impl<S, E, V> Validator<S, E> for Box<V>
where
    V: Validator<S, E> + ?Sized,
{
    #[inline]
    fn validate(&self, subject: &S) -> ValidationResult<S, E> {
        (**self).validate(subject)
    }

    #[inline]
    fn id(&self) -> ValidatorId {
        (**self).id()
    }
}

impl<S, E, V> Validator<S, E> for Arc<V>
where
    V: Validator<S, E> + ?Sized,
{
    #[inline]
    fn validate(&self, subject: &S) -> ValidationResult<S, E> {
        (**self).validate(subject)
    }

    #[inline]
    fn id(&self) -> ValidatorId {
        (**self).id()
    }
}
