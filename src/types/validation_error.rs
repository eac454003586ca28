//! Process faults: a validator could not complete its evaluation.
//!
//! A [`ValidationError`] is distinct from a rejection. It says nothing about
//! whether the subject is valid, only that the validator failed to decide.
//! It carries a message, an optional code, the validator that raised it and
//! the underlying error that caused it.

use core::fmt;
use std::borrow::Cow;
use std::error::Error;

use crate::types::{BoxError, ValidatorId};

/// A fault raised when a validator cannot finish evaluating a subject.
///
/// # Examples
///
/// ```
/// use std::error::Error;
/// use validation_rail::ValidationError;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "schema.json");
/// let fault = ValidationError::new("could not load schema")
///     .set_code(503)
///     .with_validator("schema")
///     .with_cause(io);
///
/// assert_eq!(fault.error_code(), Some(503));
/// assert_eq!(fault.to_string(), "[schema] could not load schema (code: 503)");
/// assert_eq!(fault.source().unwrap().to_string(), "schema.json");
/// ```
#[must_use]
#[derive(Debug)]
pub struct ValidationError {
    pub(crate) message: Cow<'static, str>,
    pub(crate) error_code: Option<u32>,
    pub(crate) validator: Option<ValidatorId>,
    pub(crate) cause: Option<BoxError>,
}

impl ValidationError {
    /// Creates a fault without code, validator or cause.
    #[inline]
    pub fn new<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self { message: message.into(), error_code: None, validator: None, cause: None }
    }

    /// Creates a fault with a pre-set error code.
    #[inline]
    pub fn with_code<M: Into<Cow<'static, str>>>(message: M, code: u32) -> Self {
        Self::new(message).set_code(code)
    }

    /// Sets (or overrides) the error code.
    #[inline]
    pub fn set_code(mut self, code: u32) -> Self {
        self.error_code = Some(code);
        self
    }

    /// Records the validator that raised this fault.
    #[inline]
    pub fn with_validator<V: Into<ValidatorId>>(mut self, validator: V) -> Self {
        self.validator = Some(validator.into());
        self
    }

    /// Attaches the error that made evaluation impossible.
    #[inline]
    pub fn with_cause<C: Into<BoxError>>(mut self, cause: C) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Returns the fault message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the optional error code.
    #[inline]
    pub fn error_code(&self) -> Option<u32> {
        self.error_code
    }

    /// Returns the validator that raised this fault, if recorded.
    #[inline]
    pub fn validator(&self) -> Option<&ValidatorId> {
        self.validator.as_ref()
    }

    /// Returns the underlying cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consumes the fault, returning its cause.
    #[inline]
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }
}

/// Writes `[validator] message (code: N)`, omitting the parts that are absent.
pub(crate) fn write_headline(
    f: &mut fmt::Formatter<'_>,
    validator: Option<&ValidatorId>,
    message: &str,
    code: Option<u32>,
) -> fmt::Result {
    if let Some(validator) = validator {
        write!(f, "[{validator}] ")?;
    }
    f.write_str(message)?;
    if let Some(code) = code {
        write!(f, " (code: {code})")?;
    }
    Ok(())
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_headline(f, self.validator.as_ref(), &self.message, self.error_code)
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
