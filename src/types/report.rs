#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::ValidatorId;

/// Which of the two failure kinds a report describes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The validator could not complete evaluation.
    Fault,
    /// The validator completed evaluation and rejected the subject.
    Rejection,
}

/// Owned snapshot of a [`Failure`](crate::Failure), detached from its subject.
///
/// Built by [`Failure::report`](crate::Failure::report) for callers that want
/// plain data: the entries are collected and the cause chain is flattened to
/// its messages, outermost first.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport<E> {
    pub kind: FailureKind,
    pub message: String,
    pub code: Option<u32>,
    pub validator: Option<ValidatorId>,
    pub errors: Vec<E>,
    pub causes: Vec<String>,
    /// Faults a combiner deferred while still ending in a rejection.
    #[cfg_attr(feature = "serde", serde(default))]
    pub deferred_faults: Vec<String>,
}
