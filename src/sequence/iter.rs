use core::fmt;
use core::iter::{Fuse, FusedIterator};
use std::sync::Arc;

use crate::types::error_source::{BoxedIter, Kind};
use crate::types::{ErrorEntry, ErrorSource};

type BoxedSources<E> = Box<dyn Iterator<Item = ErrorSource<E>> + Send>;

/// Lazy, ordered enumeration of error entries.
///
/// Produced by [`normalize`](crate::sequence::normalize),
/// [`aggregate`](crate::sequence::aggregate) and [`ErrorSource::sequence`].
/// Nothing is read from the underlying source until [`Iterator::next`] is called.
///
/// A sequence is meant for one reader. Give every reader its own view by
/// calling [`ErrorSource::sequence`] again.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ErrorSequence<E> {
    state: State<E>,
}

enum State<E> {
    Empty,
    Stored { kind: Arc<Kind<E>>, pos: usize },
    Boxed(Fuse<BoxedIter<E>>),
    Concat { sources: Option<BoxedSources<E>>, current: Option<Box<ErrorSequence<E>>> },
}

impl<E> ErrorSequence<E> {
    /// Returns a sequence that yields nothing.
    #[inline]
    pub fn empty() -> Self {
        Self { state: State::Empty }
    }

    #[inline]
    pub(crate) fn stored(kind: Arc<Kind<E>>) -> Self {
        Self { state: State::Stored { kind, pos: 0 } }
    }

    #[inline]
    pub(crate) fn boxed(entries: BoxedIter<E>) -> Self {
        Self { state: State::Boxed(entries.fuse()) }
    }

    #[inline]
    pub(crate) fn concat(sources: BoxedSources<E>) -> Self {
        Self { state: State::Concat { sources: Some(sources), current: None } }
    }
}

impl<E: ErrorEntry> Iterator for ErrorSequence<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        match &mut self.state {
            State::Empty => None,
            State::Stored { kind, pos } => {
                let entry = match &**kind {
                    Kind::Single(entry) if *pos == 0 => Some(entry.clone()),
                    Kind::Ordered(entries) => entries.get(*pos).cloned(),
                    _ => None,
                };
                if entry.is_some() {
                    *pos += 1;
                }
                entry
            },
            State::Boxed(entries) => entries.next(),
            State::Concat { sources, current } => loop {
                if let Some(entry) = current.as_mut().and_then(|seq| seq.next()) {
                    return Some(entry);
                }
                // the next source is only normalized once the current one is drained
                match sources.as_mut().and_then(Iterator::next) {
                    Some(source) => *current = Some(Box::new(source.sequence())),
                    None => {
                        *sources = None;
                        *current = None;
                        return None;
                    },
                }
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Empty => (0, Some(0)),
            State::Stored { kind, pos } => {
                let remaining = match &**kind {
                    Kind::Single(_) => 1usize.saturating_sub(*pos),
                    Kind::Ordered(entries) => entries.len().saturating_sub(*pos),
                    _ => 0,
                };
                (remaining, Some(remaining))
            },
            State::Boxed(entries) => entries.size_hint(),
            State::Concat { sources: None, .. } => (0, Some(0)),
            State::Concat { .. } => (0, None),
        }
    }
}

impl<E: ErrorEntry> FusedIterator for ErrorSequence<E> {}

impl<E> Default for ErrorSequence<E> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> fmt::Debug for ErrorSequence<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match &self.state {
            State::Empty => "empty",
            State::Stored { .. } => "stored",
            State::Boxed(_) => "lazy",
            State::Concat { .. } => "concat",
        };
        f.debug_struct("ErrorSequence").field("shape", &shape).finish_non_exhaustive()
    }
}
