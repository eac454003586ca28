//! Wrappers marking an iterator as a lazy error source.
//!
//! A bare iterator cannot be told apart from other values by the
//! [`IntoErrorSource`](crate::traits::IntoErrorSource) conversion, so lazy
//! sources are tagged explicitly:
//!
//! - [`Lazy`] for cloneable iterators; reading it again starts from the beginning.
//! - [`SinglePass`] for any iterator; it can be read once.
//!
//! Neither wrapper pulls an entry when created or converted.
//!
//! # Examples
//!
//! ```
//! use validation_rail::{ErrorSource, Lazy, SinglePass};
//!
//! let restartable: ErrorSource<String> = Lazy::new(["a", "b"].into_iter().map(String::from)).into();
//! assert_eq!(restartable.sequence().count(), 2);
//! assert_eq!(restartable.sequence().count(), 2);
//!
//! let once: ErrorSource<String> = SinglePass::new(vec!["a".to_string()].into_iter()).into();
//! assert_eq!(once.sequence().count(), 1);
//! assert_eq!(once.sequence().count(), 0);
//! ```
use crate::types::{ErrorEntry, ErrorSource};

/// A restartable lazy error source backed by a cloneable iterator.
///
/// # Type Parameters
///
/// * `I` - An iterator that implements `Clone`; each read works on a fresh clone.
#[repr(transparent)]
#[derive(Debug, Clone)]
pub struct Lazy<I> {
    entries: I,
}

impl<I> Lazy<I> {
    /// Wraps `entries` without advancing it.
    #[inline]
    pub fn new(entries: I) -> Self {
        Self { entries }
    }

    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.entries
    }
}

/// A read-once lazy error source backed by any iterator.
#[repr(transparent)]
#[derive(Debug)]
pub struct SinglePass<I> {
    entries: I,
}

impl<I> SinglePass<I> {
    /// Wraps `entries` without advancing it.
    #[inline]
    pub fn new(entries: I) -> Self {
        Self { entries }
    }

    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.entries
    }
}

impl<I> From<Lazy<I>> for ErrorSource<I::Item>
where
    I: Iterator + Clone + Send + Sync + 'static,
    I::Item: ErrorEntry,
{
    #[inline]
    fn from(lazy: Lazy<I>) -> Self {
        ErrorSource::lazy(lazy.entries)
    }
}

impl<I> From<SinglePass<I>> for ErrorSource<I::Item>
where
    I: Iterator + Send + 'static,
    I::Item: ErrorEntry,
{
    #[inline]
    fn from(once: SinglePass<I>) -> Self {
        ErrorSource::single_pass(once.entries)
    }
}
