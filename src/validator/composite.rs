//! Combining validators.
//!
//! A [`CompositeValidator`] runs every child against the same subject, in the
//! order the children were added. If any child rejects, it raises one
//! rejection whose entries are every rejecting child's entries, concatenated
//! lazily in child order. Accepting children contribute nothing.
//!
//! What happens when a child faults is set by [`FaultPolicy`].
use core::fmt;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::macros::log_event;
use crate::types::{
    ErrorEntry, ErrorSource, Failure, Rejections, ValidationError, ValidationFailed,
    ValidationResult, ValidatorId, DEFAULT_REJECTION_MESSAGE,
};
use crate::validator::Validator;

/// A boxed, thread-safe child validator.
pub type BoxedValidator<S, E = String> = Box<dyn Validator<S, E> + Send + Sync>;

/// How a combiner reacts when a child cannot complete its evaluation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaultPolicy {
    /// Stop at the first fault and raise it, wrapped, discarding any
    /// rejections gathered so far.
    #[default]
    Abort,
    /// Keep evaluating. Rejections win over faults: the aggregated rejection
    /// carries every child fault in
    /// [`deferred_faults`](crate::ValidationFailed::deferred_faults). If no
    /// child rejected, the first fault is raised, wrapped.
    Defer,
}

/// Validator that aggregates the rejections of its children.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use validation_rail::validator::{rule_fn, CompositeValidator, Validator};
///
/// let subject = Arc::new(vec![3, -1, 250]);
/// let items = CompositeValidator::<Arc<Vec<i32>>>::new()
///     .named("items")
///     .set_code(422)
///     .with(rule_fn("positive", |v: &Arc<Vec<i32>>| {
///         v.iter().filter(|n| **n < 0).map(|n| format!("{n} is negative")).collect::<Vec<_>>()
///     }))
///     .with(rule_fn("small", |v: &Arc<Vec<i32>>| {
///         v.iter().filter(|n| **n > 100).map(|n| format!("{n} is too large")).collect::<Vec<_>>()
///     }));
///
/// let rejection = items.validate(&subject).unwrap_err().into_rejection().unwrap();
/// assert!(Arc::ptr_eq(rejection.subject(), &subject));
/// assert_eq!(rejection.to_string(), "[items] Validation failed (code: 422)");
/// assert_eq!(rejection.errors().collect::<Vec<_>>(), ["-1 is negative", "250 is too large"]);
/// ```
#[must_use]
pub struct CompositeValidator<S, E = String> {
    id: ValidatorId,
    children: Vec<BoxedValidator<S, E>>,
    policy: FaultPolicy,
    message: Cow<'static, str>,
    error_code: Option<u32>,
}

impl<S, E> CompositeValidator<S, E> {
    /// Creates a combiner with no children, named `"composite"`.
    #[inline]
    pub fn new() -> Self {
        Self {
            id: ValidatorId::new("composite"),
            children: Vec::new(),
            policy: FaultPolicy::default(),
            message: Cow::Borrowed(DEFAULT_REJECTION_MESSAGE),
            error_code: None,
        }
    }

    /// Creates a combiner over already boxed children, in iteration order.
    pub fn from_children<I>(children: I) -> Self
    where
        I: IntoIterator<Item = BoxedValidator<S, E>>,
    {
        Self { children: children.into_iter().collect(), ..Self::new() }
    }

    /// Appends a child.
    #[inline]
    pub fn with<V>(self, child: V) -> Self
    where
        V: Validator<S, E> + Send + Sync + 'static,
    {
        self.with_boxed(Box::new(child))
    }

    /// Appends an already boxed child.
    #[inline]
    pub fn with_boxed(mut self, child: BoxedValidator<S, E>) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the identity recorded on the failures this combiner raises.
    #[inline]
    pub fn named<N: Into<ValidatorId>>(mut self, name: N) -> Self {
        self.id = name.into();
        self
    }

    /// Sets how child faults are handled.
    #[inline]
    pub fn fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the message of the aggregated rejection.
    #[inline]
    pub fn with_message<M: Into<Cow<'static, str>>>(mut self, message: M) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the error code of the aggregated rejection.
    #[inline]
    pub fn set_code(mut self, code: u32) -> Self {
        self.error_code = Some(code);
        self
    }

    /// Returns the configured fault policy.
    #[inline]
    pub fn policy(&self) -> FaultPolicy {
        self.policy
    }

    /// Returns the number of children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if there are no children. An empty combiner accepts everything.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn wrap_fault(&self, fault: ValidationError) -> ValidationError {
        ValidationError::new("a child validator could not complete evaluation")
            .with_validator(self.id.clone())
            .with_cause(fault)
    }

    fn aggregate(
        &self,
        subject: &S,
        rejections: Rejections<S, E>,
        deferred: Vec<ValidationError>,
    ) -> Failure<S, E>
    where
        S: Clone + fmt::Debug + Send + Sync + 'static,
        E: ErrorEntry + fmt::Debug,
    {
        let errors = ErrorSource::concat(rejections.sources());
        let mut aggregate = match ValidationFailed::new(subject.clone(), errors) {
            Ok(aggregate) => aggregate,
            // every child source was drained before it reached us
            Err(fault) => return fault.with_validator(self.id.clone()).into(),
        };
        aggregate = aggregate.with_message(self.message.clone()).with_validator(self.id.clone());
        if let Some(code) = self.error_code {
            aggregate = aggregate.set_code(code);
        }
        if let Some(first) = rejections.into_iter().next() {
            aggregate = aggregate.with_cause(first);
        }
        deferred.into_iter().fold(aggregate, ValidationFailed::with_deferred_fault).into()
    }
}

impl<S, E> Validator<S, E> for CompositeValidator<S, E>
where
    S: Clone + fmt::Debug + Send + Sync + 'static,
    E: ErrorEntry + fmt::Debug,
{
    fn validate(&self, subject: &S) -> ValidationResult<S, E> {
        let mut rejections = Rejections::new();
        let mut deferred = Vec::new();

        for child in &self.children {
            match child.validate(subject) {
                Ok(()) => {
                    log_event!(trace, combiner = %self.id, child = %child.id(), "child accepted subject");
                },
                Err(Failure::Rejected(rejection)) => {
                    log_event!(debug, combiner = %self.id, child = %child.id(), "child rejected subject");
                    rejections.push(rejection);
                },
                Err(Failure::Faulted(fault)) => {
                    log_event!(
                        warn,
                        combiner = %self.id,
                        child = %child.id(),
                        error = %fault,
                        "child could not complete evaluation"
                    );
                    match self.policy {
                        FaultPolicy::Abort => return Err(self.wrap_fault(fault).into()),
                        FaultPolicy::Defer => deferred.push(fault),
                    }
                },
            }
        }

        if rejections.is_empty() {
            return match deferred.into_iter().next() {
                Some(fault) => Err(self.wrap_fault(fault).into()),
                None => Ok(()),
            };
        }

        log_event!(
            debug,
            combiner = %self.id,
            rejected = rejections.len(),
            deferred = deferred.len(),
            total = self.children.len(),
            "raising aggregated rejection"
        );
        Err(self.aggregate(subject, rejections, deferred))
    }

    #[inline]
    fn id(&self) -> ValidatorId {
        self.id.clone()
    }
}

impl<S, E> Default for CompositeValidator<S, E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> fmt::Debug for CompositeValidator<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: Vec<ValidatorId> = self.children.iter().map(|child| child.id()).collect();
        f.debug_struct("CompositeValidator")
            .field("id", &self.id)
            .field("children", &children)
            .field("policy", &self.policy)
            .field("message", &self.message)
            .field("error_code", &self.error_code)
            .finish()
    }
}
