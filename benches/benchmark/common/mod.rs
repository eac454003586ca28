use criterion::Criterion;
use std::sync::OnceLock;
use std::time::Duration;

use validation_rail::validator::{rule_fn, try_rule_fn, CompositeValidator};
use validation_rail::ValidationError;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct UserData {
    pub user_id: u64,
    pub username: String,
    pub email: String,
    pub age: i32,
}

impl UserData {
    pub fn new(id: u64) -> Self {
        // one valid, one rejected and one faulting user in every three
        let (username, email, age) = match id % 3 {
            0 => (format!("user_{id}"), format!("user{id}@company.com"), 30),
            1 => (format!("U{id}"), format!("user{id}-at-company.com"), 15),
            _ => (format!("user_{id}"), format!("user{id}@company.com"), 300),
        };
        Self { user_id: id, username, email, age }
    }
}

pub fn realistic_user_data() -> &'static Vec<UserData> {
    static INSTANCE: OnceLock<Vec<UserData>> = OnceLock::new();
    INSTANCE.get_or_init(|| (0..1000).map(UserData::new).collect())
}

/// Entry lists of the given total size, split into `sources` roughly equal parts.
pub fn entry_lists(total: usize, sources: usize) -> Vec<Vec<String>> {
    let per_source = total / sources.max(1);
    (0..sources)
        .map(|s| (0..per_source).map(|i| format!("source {s} entry {i}")).collect())
        .collect()
}

// ============================================================================
// Validators
// ============================================================================

pub fn user_validator() -> CompositeValidator<UserData> {
    CompositeValidator::new()
        .named("user")
        .with(rule_fn("username", |u: &UserData| {
            let mut errors = Vec::new();
            if u.username.len() < 3 {
                errors.push("username too short".to_string());
            }
            if u.username.chars().any(|c| c.is_ascii_uppercase()) {
                errors.push("username must be lowercase".to_string());
            }
            errors
        }))
        .with(rule_fn("email", |u: &UserData| {
            (!u.email.contains('@')).then(|| format!("{} is not an email", u.email))
        }))
        .with(try_rule_fn("age", |u: &UserData| -> Result<Option<String>, ValidationError> {
            let age = u8::try_from(u.age).map_err(|e| ValidationError::new("age out of range").with_cause(e))?;
            Ok((age < 18).then(|| "must be an adult".to_string()))
        }))
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
