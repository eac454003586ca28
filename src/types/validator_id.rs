use core::fmt;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies the validator that raised a failure.
///
/// Failures outlive the `validate` call that produced them, so they carry the
/// validator's identity rather than a borrow of the validator itself. By
/// default a validator is identified by its type name; combiners and closure
/// rules are usually given an explicit name.
///
/// # Examples
///
/// ```
/// use validation_rail::ValidatorId;
///
/// struct EmailRule;
///
/// assert!(ValidatorId::of::<EmailRule>().name().ends_with("EmailRule"));
/// assert_eq!(ValidatorId::new("email").to_string(), "email");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidatorId {
    name: Cow<'static, str>,
}

impl ValidatorId {
    /// Creates an identity from an explicit name.
    #[inline]
    pub fn new<N: Into<Cow<'static, str>>>(name: N) -> Self {
        Self { name: name.into() }
    }

    /// Creates an identity from the type name of `T`.
    #[inline]
    pub fn of<T: ?Sized>() -> Self {
        Self::new(core::any::type_name::<T>())
    }

    /// Returns the validator name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&'static str> for ValidatorId {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ValidatorId {
    #[inline]
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<Cow<'static, str>> for ValidatorId {
    #[inline]
    fn from(name: Cow<'static, str>) -> Self {
        Self::new(name)
    }
}
