//! Rejections: a validator finished evaluating and found the subject invalid.
//!
//! A [`ValidationFailed`] names the rejected subject, the validator that
//! rejected it and the error entries explaining why. The entries are kept as
//! an [`ErrorSource`] and normalized on each read through
//! [`ValidationFailed::errors`].

use core::fmt;
use std::borrow::Cow;
use std::error::Error;

use crate::sequence::ErrorSequence;
use crate::traits::IntoErrorSource;
use crate::types::validation_error::write_headline;
use crate::types::{BoxError, ErrorEntry, ErrorSource, ValidationError, ValidatorId};

/// Message used when a rejection is built without an explicit one.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Validation failed";

/// Outcome raised when a subject is judged invalid.
///
/// # Type Parameters
///
/// * `S` - The subject type. The rejection keeps its own copy; validate
///   `Arc<T>` subjects to share one instance between caller and failure.
/// * `E` - The error entry type, `String` by default.
///
/// # Examples
///
/// ```
/// use validation_rail::ValidationFailed;
///
/// let rejection = ValidationFailed::<_, String>::new("bob", vec!["too short", "lowercase"])
///     .unwrap()
///     .with_validator("username")
///     .set_code(422);
///
/// assert_eq!(*rejection.subject(), "bob");
/// assert_eq!(rejection.errors().collect::<Vec<String>>(), ["too short", "lowercase"]);
/// assert_eq!(rejection.to_string(), "[username] Validation failed (code: 422)");
/// ```
#[must_use]
#[derive(Debug)]
pub struct ValidationFailed<S, E = String> {
    pub(crate) message: Cow<'static, str>,
    pub(crate) error_code: Option<u32>,
    pub(crate) validator: Option<ValidatorId>,
    pub(crate) cause: Option<BoxError>,
    pub(crate) subject: S,
    pub(crate) errors: ErrorSource<E>,
    pub(crate) deferred: Vec<ValidationError>,
}

impl<S, E: ErrorEntry> ValidationFailed<S, E> {
    /// Creates a rejection of `subject` explained by `errors`.
    ///
    /// A rejection must carry at least one entry. An empty source is refused
    /// with a [`ValidationError`]; probing it reads at most one entry, which a
    /// single-pass source keeps for later reads.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::ValidationFailed;
    ///
    /// assert!(ValidationFailed::new(7, Vec::<String>::new()).is_err());
    /// assert!(ValidationFailed::new(7, "must be even").is_ok());
    /// ```
    pub fn new<V>(subject: S, errors: V) -> Result<Self, ValidationError>
    where
        V: IntoErrorSource<E>,
    {
        let errors = errors.into_error_source();
        if errors.is_empty() {
            return Err(ValidationError::new("a rejection requires at least one error entry"));
        }
        Ok(Self::from_probed(subject, errors))
    }

    /// Builds a rejection from a source the caller has already probed as non-empty.
    #[inline]
    pub(crate) fn from_probed(subject: S, errors: ErrorSource<E>) -> Self {
        Self {
            message: Cow::Borrowed(DEFAULT_REJECTION_MESSAGE),
            error_code: None,
            validator: None,
            cause: None,
            subject,
            errors,
            deferred: Vec::new(),
        }
    }

    /// Returns a fresh lazy view over the error entries.
    ///
    /// Each call normalizes the stored source again. For single-pass sources
    /// only the first call sees the entries.
    #[inline]
    pub fn errors(&self) -> ErrorSequence<E> {
        self.errors.sequence()
    }
}

impl<S, E> ValidationFailed<S, E> {
    /// Replaces the default message.
    #[inline]
    pub fn with_message<M: Into<Cow<'static, str>>>(mut self, message: M) -> Self {
        self.message = message.into();
        self
    }

    /// Sets (or overrides) the error code.
    #[inline]
    pub fn set_code(mut self, code: u32) -> Self {
        self.error_code = Some(code);
        self
    }

    /// Records the validator that rejected the subject.
    #[inline]
    pub fn with_validator<V: Into<ValidatorId>>(mut self, validator: V) -> Self {
        self.validator = Some(validator.into());
        self
    }

    /// Attaches a prior failure this rejection was derived from.
    #[inline]
    pub fn with_cause<C: Into<BoxError>>(mut self, cause: C) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Records a fault raised while the rest of the evaluation went on.
    ///
    /// A combiner with [`FaultPolicy::Defer`](crate::FaultPolicy::Defer) keeps
    /// the faults of its children here when it still ends in a rejection.
    #[inline]
    pub fn with_deferred_fault(mut self, fault: ValidationError) -> Self {
        self.deferred.push(fault);
        self
    }

    /// Returns the faults recorded with [`with_deferred_fault`](Self::with_deferred_fault), in order.
    #[inline]
    pub fn deferred_faults(&self) -> &[ValidationError] {
        &self.deferred
    }

    /// Returns the rejection message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the optional error code.
    #[inline]
    pub fn error_code(&self) -> Option<u32> {
        self.error_code
    }

    /// Returns the validator that rejected the subject, if recorded.
    #[inline]
    pub fn validator(&self) -> Option<&ValidatorId> {
        self.validator.as_ref()
    }

    /// Returns the prior failure, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns the rejected subject.
    #[inline]
    pub fn subject(&self) -> &S {
        &self.subject
    }

    /// Returns the stored error source, shared with any clone of it.
    #[inline]
    pub fn error_source(&self) -> &ErrorSource<E> {
        &self.errors
    }

    /// Consumes the rejection, returning the subject.
    #[inline]
    pub fn into_subject(self) -> S {
        self.subject
    }

    /// Consumes the rejection, returning the subject and the error source.
    #[inline]
    pub fn into_parts(self) -> (S, ErrorSource<E>) {
        (self.subject, self.errors)
    }
}

impl<S, E> fmt::Display for ValidationFailed<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_headline(f, self.validator.as_ref(), &self.message, self.error_code)
    }
}

impl<S, E> Error for ValidationFailed<S, E>
where
    S: fmt::Debug,
    E: fmt::Debug,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
