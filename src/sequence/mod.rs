//! Normalization and aggregation of error sources into lazy sequences.
//!
//! - [`normalize`] turns one value (a single entry, an ordered container or a
//!   lazy iterator wrapper) into an [`ErrorSequence`] without reading it.
//! - [`aggregate`] concatenates any number of sources end-to-end, preserving
//!   source order and each source's own entry order.
//!
//! Both are lazy: a source is only normalized when the consumer drains the
//! one before it.
//!
//! # Examples
//!
//! ```
//! use validation_rail::sequence::{aggregate, normalize};
//! use validation_rail::{ErrorSource, Lazy};
//!
//! let single: Vec<String> = normalize("name is required").collect();
//! assert_eq!(single, ["name is required"]);
//!
//! let merged: Vec<String> = aggregate([
//!     ErrorSource::single("a".to_string()),
//!     ErrorSource::ordered(["b".to_string(), "c".to_string()]),
//!     Lazy::new(std::iter::repeat("d".to_string()).take(2)).into(),
//! ])
//! .collect();
//! assert_eq!(merged, ["a", "b", "c", "d", "d"]);
//! ```
pub mod iter;

pub use self::iter::ErrorSequence;

use crate::traits::IntoErrorSource;
use crate::types::ErrorEntry;

/// Converts `value` into a lazy sequence of error entries.
///
/// Single entries become one-element sequences, ordered containers yield
/// their elements in order, and lazy wrappers are adapted without being read.
#[inline]
pub fn normalize<E, V>(value: V) -> ErrorSequence<E>
where
    E: ErrorEntry,
    V: IntoErrorSource<E>,
{
    value.into_error_source().sequence()
}

/// Concatenates `sources` into one lazy sequence.
///
/// The outer iterator is advanced only when the previous source is exhausted,
/// and each source is normalized at that moment. An empty input yields an
/// empty sequence.
///
/// # Examples
///
/// ```
/// use validation_rail::sequence::aggregate;
///
/// let merged: Vec<String> = aggregate([vec!["a".to_string()], vec![], vec!["b".to_string()]]).collect();
/// assert_eq!(merged, ["a", "b"]);
///
/// let nothing: Vec<String> = aggregate(Vec::<Vec<String>>::new()).collect();
/// assert!(nothing.is_empty());
/// ```
pub fn aggregate<E, I>(sources: I) -> ErrorSequence<E>
where
    E: ErrorEntry,
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: IntoErrorSource<E> + 'static,
{
    ErrorSequence::concat(Box::new(sources.into_iter().map(IntoErrorSource::into_error_source)))
}
