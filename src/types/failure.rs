//! The two ways a `validate` call can fail.
//!
//! [`Failure`] joins the process fault ([`ValidationError`]) and the rejection
//! ([`ValidationFailed`]) so validators can return either through one
//! `Result`. Accepting a subject is a plain `Ok(())`.

use core::fmt;
use std::error::Error;

use crate::types::{
    ErrorEntry, FailureKind, FailureReport, ValidationError, ValidationFailed, ValidatorId,
};

/// Result of one `validate` call.
pub type ValidationResult<S, E = String> = Result<(), Failure<S, E>>;

/// A failed `validate` call: either a fault or a rejection.
///
/// # Examples
///
/// ```
/// use validation_rail::{Failure, ValidationError, ValidationFailed};
///
/// let fault: Failure<i32> = ValidationError::new("lookup table unavailable").into();
/// assert!(fault.is_fault());
///
/// let rejection: Failure<i32> = ValidationFailed::new(3, "must be even").unwrap().into();
/// assert!(rejection.is_rejection());
/// assert_eq!(rejection.message(), "Validation failed");
/// ```
#[must_use]
#[derive(Debug)]
pub enum Failure<S, E = String> {
    /// Evaluation could not be completed.
    Faulted(ValidationError),
    /// Evaluation completed and the subject is invalid.
    Rejected(ValidationFailed<S, E>),
}

impl<S, E> Failure<S, E> {
    /// Returns `true` for a process fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Faulted(_))
    }

    /// Returns `true` for a rejection.
    #[inline]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns the kind of failure.
    #[inline]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Faulted(_) => FailureKind::Fault,
            Self::Rejected(_) => FailureKind::Rejection,
        }
    }

    /// Returns the fault, if this is one.
    #[inline]
    pub fn as_fault(&self) -> Option<&ValidationError> {
        match self {
            Self::Faulted(fault) => Some(fault),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the rejection, if this is one.
    #[inline]
    pub fn as_rejection(&self) -> Option<&ValidationFailed<S, E>> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Faulted(_) => None,
        }
    }

    /// Consumes the failure, returning the fault if this is one.
    #[inline]
    pub fn into_fault(self) -> Option<ValidationError> {
        match self {
            Self::Faulted(fault) => Some(fault),
            Self::Rejected(_) => None,
        }
    }

    /// Consumes the failure, returning the rejection if this is one.
    #[inline]
    pub fn into_rejection(self) -> Option<ValidationFailed<S, E>> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Faulted(_) => None,
        }
    }

    /// Returns the message of either kind.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Faulted(fault) => fault.message(),
            Self::Rejected(rejection) => rejection.message(),
        }
    }

    /// Returns the error code of either kind.
    #[inline]
    pub fn error_code(&self) -> Option<u32> {
        match self {
            Self::Faulted(fault) => fault.error_code(),
            Self::Rejected(rejection) => rejection.error_code(),
        }
    }

    /// Returns the validator recorded on either kind.
    #[inline]
    pub fn validator(&self) -> Option<&ValidatorId> {
        match self {
            Self::Faulted(fault) => fault.validator(),
            Self::Rejected(rejection) => rejection.validator(),
        }
    }

    /// Returns the cause recorded on either kind.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Faulted(fault) => fault.cause(),
            Self::Rejected(rejection) => rejection.cause(),
        }
    }
}

impl<S, E: ErrorEntry> Failure<S, E> {
    /// Takes an owned snapshot of this failure.
    ///
    /// Collecting the entries reads the rejection's error source; a
    /// single-pass source is consumed by it. An infinite source never
    /// finishes collecting, so cap it first, for example through
    /// `errors().take(n)` on the rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::{Failure, FailureKind, ValidationFailed};
    ///
    /// let failure: Failure<&str, String> = ValidationFailed::new("", vec!["required"]).unwrap().into();
    /// let report = failure.report();
    ///
    /// assert_eq!(report.kind, FailureKind::Rejection);
    /// assert_eq!(report.errors, ["required"]);
    /// ```
    pub fn report(&self) -> FailureReport<E> {
        let mut causes = Vec::new();
        let mut next = self.cause().map(|cause| cause as &(dyn Error + 'static));
        while let Some(cause) = next {
            causes.push(cause.to_string());
            next = cause.source();
        }

        FailureReport {
            kind: self.kind(),
            message: self.message().to_owned(),
            code: self.error_code(),
            validator: self.validator().cloned(),
            errors: self.as_rejection().map(|r| r.errors().collect()).unwrap_or_default(),
            causes,
            deferred_faults: self
                .as_rejection()
                .map(|r| r.deferred_faults().iter().map(ToString::to_string).collect())
                .unwrap_or_default(),
        }
    }
}

impl<S, E> From<ValidationError> for Failure<S, E> {
    #[inline]
    fn from(fault: ValidationError) -> Self {
        Self::Faulted(fault)
    }
}

impl<S, E> From<ValidationFailed<S, E>> for Failure<S, E> {
    #[inline]
    fn from(rejection: ValidationFailed<S, E>) -> Self {
        Self::Rejected(rejection)
    }
}

impl<S, E> fmt::Display for Failure<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Faulted(fault) => fmt::Display::fmt(fault, f),
            Self::Rejected(rejection) => fmt::Display::fmt(rejection, f),
        }
    }
}

impl<S, E> Error for Failure<S, E>
where
    S: fmt::Debug,
    E: fmt::Debug,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Faulted(fault) => fault.source(),
            Self::Rejected(rejection) => rejection.source(),
        }
    }
}
