//! Conversion helpers between validation results and plain `Result`s.
//!
//! These adapters flatten failures into the entries they carry, for callers
//! that only care about the list of problems, and turn a validator run into a
//! `Result` that hands the subject back on success.
//!
//! # Examples
//!
//! ```
//! use validation_rail::convert::*;
//! use validation_rail::validator::rule_fn;
//!
//! let not_blank = rule_fn("not_blank", |s: &String| s.trim().is_empty().then(|| "blank".to_string()));
//!
//! assert_eq!(validated(&not_blank, "ok".to_string()).unwrap(), "ok");
//! assert_eq!(collect_errors(validated(&not_blank, " ".to_string()).map(drop)).unwrap(), ["blank"]);
//! ```
use crate::types::{ErrorEntry, Failure, ValidationError, ValidationFailed, ValidationResult};
use crate::validator::Validator;

/// Flattens a validation result into its error entries.
///
/// # Returns
///
/// * `Ok(vec![])` if the subject was accepted
/// * `Ok(entries)` if it was rejected
/// * `Err(fault)` if evaluation could not complete
///
/// Every entry is collected, so a rejection over an infinite source never
/// returns. Cap such sources first, for example with `errors().take(n)`.
///
/// # Examples
///
/// ```
/// use validation_rail::convert::collect_errors;
/// use validation_rail::{fault, Failure, ValidationFailed, ValidationResult};
///
/// let accepted: ValidationResult<u8> = Ok(());
/// assert!(collect_errors(accepted).unwrap().is_empty());
///
/// let rejected: ValidationResult<u8> = Err(ValidationFailed::new(0, "zero").unwrap().into());
/// assert_eq!(collect_errors(rejected).unwrap(), ["zero"]);
///
/// let faulted: ValidationResult<u8> = Err(Failure::from(fault!("offline")));
/// assert!(collect_errors(faulted).is_err());
/// ```
pub fn collect_errors<S, E>(result: ValidationResult<S, E>) -> Result<Vec<E>, ValidationError>
where
    E: ErrorEntry,
{
    match result {
        Ok(()) => Ok(Vec::new()),
        Err(Failure::Rejected(rejection)) => Ok(rejection.errors().collect()),
        Err(Failure::Faulted(fault)) => Err(fault),
    }
}

/// Replaces a rejection with the entries it carries, leaving `Ok` untouched.
///
/// Like [`collect_errors`], this reads every entry; an infinite source must
/// be capped first, for example with `errors().take(n)`.
///
/// # Examples
///
/// ```
/// use validation_rail::convert::rejection_to_result;
/// use validation_rail::ValidationFailed;
///
/// let rejected: Result<u8, ValidationFailed<u8>> =
///     Err(ValidationFailed::new(200, vec!["too large", "not prime"]).unwrap());
/// assert_eq!(rejection_to_result(rejected), Err(vec!["too large".to_string(), "not prime".to_string()]));
///
/// let fine: Result<u8, ValidationFailed<u8>> = Ok(7);
/// assert_eq!(rejection_to_result(fine), Ok(7));
/// ```
pub fn rejection_to_result<T, S, E>(result: Result<T, ValidationFailed<S, E>>) -> Result<T, Vec<E>>
where
    E: ErrorEntry,
{
    result.map_err(|rejection| rejection.errors().collect())
}

/// Returns the first entry of a rejection, reading nothing past it.
///
/// # Examples
///
/// ```
/// use validation_rail::convert::first_error;
/// use validation_rail::{Lazy, ValidationFailed};
///
/// let endless = Lazy::new((1..).map(|n| format!("problem {n}")));
/// let rejection = ValidationFailed::new("subject", endless).unwrap();
/// assert_eq!(first_error(&rejection).as_deref(), Some("problem 1"));
/// ```
pub fn first_error<S, E>(rejection: &ValidationFailed<S, E>) -> Option<E>
where
    E: ErrorEntry,
{
    rejection.errors().next()
}

/// Runs `validator` on `subject` and hands the subject back if it is accepted.
///
/// # Examples
///
/// ```
/// use validation_rail::convert::validated;
/// use validation_rail::validator::rule_fn;
///
/// let positive = rule_fn("positive", |n: &i32| (*n <= 0).then(|| format!("{n} is not positive")));
///
/// assert_eq!(validated(&positive, 5).unwrap(), 5);
/// assert!(validated(&positive, -5).unwrap_err().is_rejection());
/// ```
pub fn validated<S, E, V>(validator: &V, subject: S) -> Result<S, Failure<S, E>>
where
    V: Validator<S, E> + ?Sized,
{
    validator.validate(&subject)?;
    Ok(subject)
}
