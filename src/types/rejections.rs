use core::fmt;

use crate::types::{ErrorSource, ErrorVec, ValidationFailed};

/// Ordered collection of rejections gathered from several validators.
///
/// Combiners push each child's rejection here in evaluation order, then
/// concatenate the stored error sources into one aggregate without reading
/// any of them.
///
/// # Examples
///
/// ```
/// use validation_rail::{ErrorSource, Rejections, ValidationFailed};
///
/// let mut rejections = Rejections::new();
/// rejections.push(ValidationFailed::<_, String>::new(5, "too small").unwrap());
/// rejections.push(ValidationFailed::<_, String>::new(5, vec!["odd", "prime"]).unwrap());
///
/// let merged: Vec<String> = ErrorSource::concat(rejections.sources()).sequence().collect();
/// assert_eq!(merged, ["too small", "odd", "prime"]);
/// ```
pub struct Rejections<S, E = String> {
    items: ErrorVec<ValidationFailed<S, E>>,
}

impl<S, E> Rejections<S, E> {
    /// Creates an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    /// Appends a rejection after the ones already gathered.
    #[inline]
    pub fn push(&mut self, rejection: ValidationFailed<S, E>) {
        self.items.push(rejection);
    }

    /// Returns `true` if nothing was rejected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of gathered rejections.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the earliest gathered rejection.
    #[inline]
    pub fn first(&self) -> Option<&ValidationFailed<S, E>> {
        self.items.first()
    }

    /// Returns an iterator over the rejections in the order they were pushed.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ValidationFailed<S, E>> {
        self.items.iter()
    }

    /// Returns handles to every rejection's error source, in push order.
    ///
    /// The handles share storage with the rejections; nothing is read.
    pub fn sources(&self) -> impl Iterator<Item = ErrorSource<E>> + '_ {
        self.items.iter().map(|rejection| rejection.error_source().clone())
    }
}

impl<S, E> Default for Rejections<S, E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Debug, E: fmt::Debug> fmt::Debug for Rejections<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<S, E> Extend<ValidationFailed<S, E>> for Rejections<S, E> {
    fn extend<I: IntoIterator<Item = ValidationFailed<S, E>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<S, E> FromIterator<ValidationFailed<S, E>> for Rejections<S, E> {
    fn from_iter<I: IntoIterator<Item = ValidationFailed<S, E>>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<S, E> IntoIterator for Rejections<S, E> {
    type Item = ValidationFailed<S, E>;
    type IntoIter = smallvec::IntoIter<[ValidationFailed<S, E>; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, S, E> IntoIterator for &'a Rejections<S, E> {
    type Item = &'a ValidationFailed<S, E>;
    type IntoIter = core::slice::Iter<'a, ValidationFailed<S, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
