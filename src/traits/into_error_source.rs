//! Trait for converting values into an [`ErrorSource`].
//!
//! This is the single capability check behind normalization. Each implementor
//! decides, once, which shape of source it becomes.
//!
//! # Implementations
//!
//! - `ErrorSource<E>` - identity
//! - `Vec<E>`, `ErrorVec<E>`, `[E; N]` - ordered container
//! - `Option<E>` - one entry, or none
//! - [`Lazy<I>`](crate::Lazy) / [`SinglePass<I>`](crate::SinglePass) - adapted without reading
//! - `String`, `&'static str`, `Cow<'static, str>` - a single `String` entry
//! - `Vec<&'static str>` - ordered `String` entries
//!
//! A bare value of any other entry type is not a source on its own: a blanket
//! `impl<E> IntoErrorSource<E> for E` would overlap every impl above. Wrap
//! single entries of custom types with [`ErrorSource::single`] or `Some(entry)`.
//!
//! # Examples
//!
//! ```
//! use validation_rail::traits::IntoErrorSource;
//! use validation_rail::ErrorSource;
//!
//! let one: ErrorSource<String> = "too short".into_error_source();
//! let many: ErrorSource<String> = vec!["too short", "not unique"].into_error_source();
//!
//! assert_eq!(one.sequence().count(), 1);
//! assert_eq!(many.sequence().count(), 2);
//! ```
use std::borrow::Cow;

use crate::types::error_source::Kind;
use crate::types::{ErrorEntry, ErrorSource, ErrorVec, Lazy, SinglePass};

/// Converts a value into an [`ErrorSource`] of entries `E`.
///
/// Implement this for domain types that should be accepted wherever the
/// crate takes an error source:
///
/// ```
/// use validation_rail::traits::IntoErrorSource;
/// use validation_rail::ErrorSource;
///
/// struct Violations(Vec<String>);
///
/// impl IntoErrorSource<String> for Violations {
///     fn into_error_source(self) -> ErrorSource<String> {
///         ErrorSource::ordered(self.0)
///     }
/// }
///
/// let source = Violations(vec!["bad".into()]).into_error_source();
/// assert!(!source.is_empty());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a source of `{E}` error entries",
    label = "this type does not implement `IntoErrorSource<{E}>`",
    note = "wrap iterators in `Lazy::new` or `SinglePass::new`, or build an `ErrorSource` directly"
)]
pub trait IntoErrorSource<E> {
    /// Converts `self` into an [`ErrorSource`].
    fn into_error_source(self) -> ErrorSource<E>;
}

impl<E: ErrorEntry> IntoErrorSource<E> for ErrorSource<E> {
    #[inline]
    fn into_error_source(self) -> ErrorSource<E> {
        self
    }
}

impl<E: ErrorEntry> IntoErrorSource<E> for Vec<E> {
    #[inline]
    fn into_error_source(self) -> ErrorSource<E> {
        ErrorSource::ordered(self)
    }
}

impl<E: ErrorEntry> IntoErrorSource<E> for ErrorVec<E> {
    #[inline]
    fn into_error_source(self) -> ErrorSource<E> {
        ErrorSource::from_kind(Kind::Ordered(self))
    }
}

impl<E: ErrorEntry, const N: usize> IntoErrorSource<E> for [E; N] {
    #[inline]
    fn into_error_source(self) -> ErrorSource<E> {
        ErrorSource::ordered(self)
    }
}

impl<E: ErrorEntry> IntoErrorSource<E> for Option<E> {
    #[inline]
    fn into_error_source(self) -> ErrorSource<E> {
        match self {
            Some(entry) => ErrorSource::single(entry),
            None => ErrorSource::empty(),
        }
    }
}

impl<I> IntoErrorSource<I::Item> for Lazy<I>
where
    I: Iterator + Clone + Send + Sync + 'static,
    I::Item: ErrorEntry,
{
    #[inline]
    fn into_error_source(self) -> ErrorSource<I::Item> {
        ErrorSource::lazy(self.into_inner())
    }
}

impl<I> IntoErrorSource<I::Item> for SinglePass<I>
where
    I: Iterator + Send + 'static,
    I::Item: ErrorEntry,
{
    #[inline]
    fn into_error_source(self) -> ErrorSource<I::Item> {
        ErrorSource::single_pass(self.into_inner())
    }
}

impl IntoErrorSource<String> for String {
    #[inline]
    fn into_error_source(self) -> ErrorSource<String> {
        ErrorSource::single(self)
    }
}

impl IntoErrorSource<String> for &'static str {
    #[inline]
    fn into_error_source(self) -> ErrorSource<String> {
        ErrorSource::single(self.to_owned())
    }
}

impl IntoErrorSource<String> for Cow<'static, str> {
    #[inline]
    fn into_error_source(self) -> ErrorSource<String> {
        ErrorSource::single(self.into_owned())
    }
}

impl IntoErrorSource<String> for Vec<&'static str> {
    #[inline]
    fn into_error_source(self) -> ErrorSource<String> {
        ErrorSource::ordered(self.into_iter().map(str::to_owned))
    }
}
