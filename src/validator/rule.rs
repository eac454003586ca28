//! Rules: validators described by the error entries they compute.
//!
//! Most leaf checks only need to say what is wrong with a subject. A [`Rule`]
//! computes an [`ErrorSource`]; an empty source means the subject is valid and
//! a non-empty one becomes a rejection naming the rule, with the default
//! message `"Validation failed"`.
//!
//! # Examples
//!
//! ```
//! use validation_rail::validator::{Rule, Validator};
//! use validation_rail::{ErrorSource, ValidationError};
//!
//! struct Ascii;
//!
//! impl Rule<String> for Ascii {
//!     fn compute_errors(&self, subject: &String) -> Result<ErrorSource<String>, ValidationError> {
//!         Ok(ErrorSource::ordered(
//!             subject.chars().filter(|c| !c.is_ascii()).map(|c| format!("'{c}' is not ASCII")),
//!         ))
//!     }
//! }
//!
//! let ascii = Ascii.into_validator();
//! assert!(ascii.is_valid(&"plain".to_string()));
//!
//! let rejection = ascii.validate(&"naïve".to_string()).unwrap_err().into_rejection().unwrap();
//! assert_eq!(rejection.errors().collect::<Vec<_>>(), ["'ï' is not ASCII"]);
//! ```
use core::fmt;

use crate::traits::IntoErrorSource;
use crate::types::{
    ErrorEntry, ErrorSource, ValidationError, ValidationFailed, ValidationResult, ValidatorId,
};
use crate::validator::Validator;

/// Computes the error entries explaining why a subject is invalid.
pub trait Rule<S, E = String> {
    /// Returns the entries for `subject`, or a fault if they cannot be computed.
    ///
    /// An empty source means the subject is valid.
    fn compute_errors(&self, subject: &S) -> Result<ErrorSource<E>, ValidationError>;

    /// Identity recorded on rejections. Defaults to the implementing type name.
    fn id(&self) -> ValidatorId {
        ValidatorId::of::<Self>()
    }

    /// Wraps this rule into a [`Validator`].
    fn into_validator(self) -> RuleValidator<Self>
    where
        Self: Sized,
    {
        RuleValidator::new(self)
    }
}

/// Runs a rule and turns its outcome into a validation result.
fn run_rule<S, E, R>(rule: &R, subject: &S) -> ValidationResult<S, E>
where
    S: Clone,
    E: ErrorEntry,
    R: Rule<S, E> + ?Sized,
{
    let errors = rule.compute_errors(subject).map_err(|mut fault| {
        if fault.validator.is_none() {
            fault.validator = Some(rule.id());
        }
        fault
    })?;

    if errors.is_empty() {
        return Ok(());
    }
    Err(ValidationFailed::from_probed(subject.clone(), errors).with_validator(rule.id()).into())
}

/// Adapts a [`Rule`] into a [`Validator`].
///
/// Faults returned by the rule are stamped with the rule's id unless they
/// already name a validator.
#[derive(Clone, Copy, Default)]
pub struct RuleValidator<R> {
    rule: R,
}

impl<R> RuleValidator<R> {
    /// Wraps `rule`.
    #[inline]
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// Returns the wrapped rule.
    #[inline]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Consumes the adapter, returning the wrapped rule.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rule
    }
}

impl<S, E, R> Validator<S, E> for RuleValidator<R>
where
    S: Clone,
    E: ErrorEntry,
    R: Rule<S, E>,
{
    #[inline]
    fn validate(&self, subject: &S) -> ValidationResult<S, E> {
        run_rule(&self.rule, subject)
    }

    #[inline]
    fn id(&self) -> ValidatorId {
        self.rule.id()
    }
}

impl<R: fmt::Debug> fmt::Debug for RuleValidator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RuleValidator").field(&self.rule).finish()
    }
}

/// A named rule backed by a closure. Built by [`rule_fn`] and [`try_rule_fn`].
///
/// Implements both [`Rule`] and [`Validator`].
#[derive(Clone)]
pub struct RuleFn<F> {
    id: ValidatorId,
    check: F,
}

impl<S, E, F> Rule<S, E> for RuleFn<F>
where
    F: Fn(&S) -> Result<ErrorSource<E>, ValidationError>,
{
    #[inline]
    fn compute_errors(&self, subject: &S) -> Result<ErrorSource<E>, ValidationError> {
        (self.check)(subject)
    }

    #[inline]
    fn id(&self) -> ValidatorId {
        self.id.clone()
    }
}

impl<S, E, F> Validator<S, E> for RuleFn<F>
where
    S: Clone,
    E: ErrorEntry,
    F: Fn(&S) -> Result<ErrorSource<E>, ValidationError>,
{
    #[inline]
    fn validate(&self, subject: &S) -> ValidationResult<S, E> {
        run_rule(self, subject)
    }

    #[inline]
    fn id(&self) -> ValidatorId {
        self.id.clone()
    }
}

impl<F> fmt::Debug for RuleFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleFn").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Builds a named rule from an infallible closure.
///
/// The closure may return anything convertible into an error source: a
/// single entry, an `Option`, a container or a lazy wrapper.
///
/// # Examples
///
/// ```
/// use validation_rail::validator::{rule_fn, Validator};
///
/// let even = rule_fn("even", |n: &u32| (n % 2 != 0).then(|| format!("{n} is odd")));
///
/// assert!(even.is_valid(&4));
/// let failure = even.validate(&3).unwrap_err();
/// assert_eq!(failure.to_string(), "[even] Validation failed");
/// ```
pub fn rule_fn<S, E, V, F, N>(
    name: N,
    check: F,
) -> RuleFn<impl Fn(&S) -> Result<ErrorSource<E>, ValidationError>>
where
    E: ErrorEntry,
    V: IntoErrorSource<E>,
    F: Fn(&S) -> V,
    N: Into<ValidatorId>,
{
    RuleFn { id: name.into(), check: move |subject: &S| Ok(check(subject).into_error_source()) }
}

/// Builds a named rule from a closure that may fault.
///
/// # Examples
///
/// ```
/// use validation_rail::traits::FaultExt;
/// use validation_rail::validator::{try_rule_fn, Validator};
///
/// let port = try_rule_fn("port", |raw: &String| {
///     let port: u32 = raw.parse().fault("port is not a number")?;
///     Ok((port > 65_535).then(|| format!("{port} is out of range")))
/// });
///
/// assert!(port.is_valid(&"8080".to_string()));
/// assert!(port.validate(&"70000".to_string()).unwrap_err().is_rejection());
/// assert!(port.validate(&"http".to_string()).unwrap_err().is_fault());
/// ```
pub fn try_rule_fn<S, E, V, F, N>(
    name: N,
    check: F,
) -> RuleFn<impl Fn(&S) -> Result<ErrorSource<E>, ValidationError>>
where
    E: ErrorEntry,
    V: IntoErrorSource<E>,
    F: Fn(&S) -> Result<V, ValidationError>,
    N: Into<ValidatorId>,
{
    RuleFn {
        id: name.into(),
        check: move |subject: &S| check(subject).map(IntoErrorSource::into_error_source),
    }
}
