//! Error sources: anything that contributes entries to an [`ErrorSequence`].
//!
//! An [`ErrorSource`] is a cheap, shareable handle over one of five shapes:
//!
//! | Shape | Constructor | Restartable |
//! |-------|-------------|-------------|
//! | single entry | [`ErrorSource::single`] | yes |
//! | ordered container | [`ErrorSource::ordered`] | yes |
//! | cloneable iterator | [`ErrorSource::lazy`] | yes |
//! | any iterator | [`ErrorSource::single_pass`] | no |
//! | concatenation | [`ErrorSource::concat`] | if every member is |
//!
//! Building a source never reads from it. Entries are only pulled when the
//! sequence returned by [`ErrorSource::sequence`] is iterated.
//!
//! # Examples
//!
//! ```
//! use validation_rail::ErrorSource;
//!
//! let source = ErrorSource::concat([
//!     ErrorSource::single("missing name".to_string()),
//!     ErrorSource::ordered(vec!["too short".to_string(), "not unique".to_string()]),
//! ]);
//!
//! let errors: Vec<String> = source.sequence().collect();
//! assert_eq!(errors, ["missing name", "too short", "not unique"]);
//! assert!(source.is_restartable());
//! ```
use core::fmt;
use core::iter;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::sequence::ErrorSequence;
use crate::traits::IntoErrorSource;
use crate::types::ErrorVec;

/// Bound shared by every error entry the core carries.
///
/// Entries are opaque: the core clones them into sequences and moves them
/// across threads alongside the failure carrying them, but never inspects them.
pub trait ErrorEntry: Clone + Send + Sync + 'static {}

impl<T> ErrorEntry for T where T: Clone + Send + Sync + 'static {}

pub(crate) type BoxedIter<E> = Box<dyn Iterator<Item = E> + Send>;

/// Produces a fresh, unread copy of a stored iterator.
pub(crate) trait Replay<E>: Send + Sync {
    fn replay(&self) -> BoxedIter<E>;
}

impl<I> Replay<I::Item> for I
where
    I: Iterator + Clone + Send + Sync + 'static,
{
    #[inline]
    fn replay(&self) -> BoxedIter<I::Item> {
        Box::new(self.clone())
    }
}

pub(crate) enum Kind<E> {
    Single(E),
    Ordered(ErrorVec<E>),
    Lazy(Box<dyn Replay<E>>),
    SinglePass(Mutex<Option<BoxedIter<E>>>),
    Concat(Vec<ErrorSource<E>>),
}

/// Shareable handle over one contributor of error entries.
///
/// Cloning the handle shares the underlying storage. For single-pass sources
/// this means whichever holder reads first consumes the entries.
#[must_use]
pub struct ErrorSource<E> {
    kind: Arc<Kind<E>>,
}

impl<E> ErrorSource<E> {
    #[inline]
    pub(crate) fn from_kind(kind: Kind<E>) -> Self {
        Self { kind: Arc::new(kind) }
    }

    /// Creates a source with no entries.
    #[inline]
    pub fn empty() -> Self {
        Self::from_kind(Kind::Ordered(ErrorVec::new()))
    }

    /// Creates a source holding exactly one entry, unchanged.
    #[inline]
    pub fn single(entry: E) -> Self {
        Self::from_kind(Kind::Single(entry))
    }

    /// Creates a source over the elements of an ordered container, in container order.
    #[inline]
    pub fn ordered<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::from_kind(Kind::Ordered(entries.into_iter().collect()))
    }

    /// Returns `true` when reading this source again yields the same entries.
    ///
    /// A concatenation is only as restartable as its weakest member.
    pub fn is_restartable(&self) -> bool {
        match &*self.kind {
            Kind::Single(_) | Kind::Ordered(_) | Kind::Lazy(_) => true,
            Kind::SinglePass(_) => false,
            Kind::Concat(members) => members.iter().all(ErrorSource::is_restartable),
        }
    }
}

impl<E: ErrorEntry> ErrorSource<E> {
    /// Wraps a cloneable iterator without reading it.
    ///
    /// Every read clones the untouched iterator, so the source is restartable
    /// and an infinite iterator is never forced.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::ErrorSource;
    ///
    /// let source = ErrorSource::lazy((1..).map(|n| format!("entry {n}")));
    /// let first: Vec<String> = source.sequence().take(2).collect();
    /// assert_eq!(first, ["entry 1", "entry 2"]);
    /// ```
    #[inline]
    pub fn lazy<I>(entries: I) -> Self
    where
        I: Iterator<Item = E> + Clone + Send + Sync + 'static,
    {
        Self::from_kind(Kind::Lazy(Box::new(entries)))
    }

    /// Wraps an arbitrary iterator without reading it. The source can be read once.
    #[inline]
    pub fn single_pass<I>(entries: I) -> Self
    where
        I: Iterator<Item = E> + Send + 'static,
    {
        Self::from_kind(Kind::SinglePass(Mutex::new(Some(Box::new(entries)))))
    }

    /// Stores several sources end-to-end without reading any of them.
    ///
    /// Reading the result yields every entry of the first source, then every
    /// entry of the second, and so on.
    pub fn concat<I>(sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoErrorSource<E>,
    {
        let members = sources.into_iter().map(IntoErrorSource::into_error_source).collect();
        Self::from_kind(Kind::Concat(members))
    }

    /// Returns a fresh lazy view over the entries.
    ///
    /// Restartable sources produce the full entry list on every call. A
    /// single-pass source hands its iterator to the first caller; later calls
    /// see an empty sequence.
    pub fn sequence(&self) -> ErrorSequence<E> {
        match &*self.kind {
            Kind::Single(_) | Kind::Ordered(_) => ErrorSequence::stored(Arc::clone(&self.kind)),
            Kind::Lazy(replay) => ErrorSequence::boxed(replay.replay()),
            Kind::SinglePass(slot) => match lock(slot).take() {
                Some(entries) => ErrorSequence::boxed(entries),
                None => ErrorSequence::empty(),
            },
            Kind::Concat(members) => ErrorSequence::concat(Box::new(members.clone().into_iter())),
        }
    }

    /// Returns `true` if the source has no entries left to yield.
    ///
    /// Restartable sources are probed through a fresh view. A single-pass
    /// source pulls at most one entry and keeps it in front of the rest, so
    /// probing never loses entries.
    pub fn is_empty(&self) -> bool {
        match &*self.kind {
            Kind::Single(_) => false,
            Kind::Ordered(entries) => entries.is_empty(),
            Kind::Lazy(replay) => replay.replay().next().is_none(),
            Kind::SinglePass(slot) => {
                let mut slot = lock(slot);
                let Some(mut entries) = slot.take() else {
                    return true;
                };
                match entries.next() {
                    Some(first) => {
                        *slot = Some(Box::new(iter::once(first).chain(entries)));
                        false
                    },
                    None => true,
                }
            },
            Kind::Concat(members) => members.iter().all(ErrorSource::is_empty),
        }
    }
}

#[inline]
fn lock<T>(slot: &Mutex<T>) -> MutexGuard<'_, T> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<E> Clone for ErrorSource<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self { kind: Arc::clone(&self.kind) }
    }
}

impl<E> Default for ErrorSource<E> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<E: fmt::Debug> fmt::Debug for ErrorSource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.kind {
            Kind::Single(entry) => f.debug_tuple("Single").field(entry).finish(),
            Kind::Ordered(entries) => f.debug_tuple("Ordered").field(entries).finish(),
            Kind::Lazy(_) => f.write_str("Lazy(..)"),
            Kind::SinglePass(_) => f.write_str("SinglePass(..)"),
            Kind::Concat(members) => f.debug_tuple("Concat").field(members).finish(),
        }
    }
}
