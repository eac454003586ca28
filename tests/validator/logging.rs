//! Tests for tracing integration.

use tracing_test::traced_test;
use validation_rail::validator::{rule_fn, try_rule_fn, CompositeValidator, FaultPolicy, Validator};
use validation_rail::{fault, ValidationError};

#[traced_test]
#[test]
fn combiner_logs_each_child_outcome() {
    let composite = CompositeValidator::new()
        .named("signup")
        .fault_policy(FaultPolicy::Defer)
        .with(rule_fn("accepts", |_: &u8| None::<String>))
        .with(rule_fn("rejects", |_: &u8| "bad"))
        .with(try_rule_fn("faults", |_: &u8| -> Result<Vec<String>, ValidationError> {
            Err(fault!("offline"))
        }));

    assert!(composite.validate(&1).is_err());

    assert!(logs_contain("child accepted subject"));
    assert!(logs_contain("child rejected subject"));
    assert!(logs_contain("child could not complete evaluation"));
    assert!(logs_contain("raising aggregated rejection"));
    assert!(logs_contain("signup"));
}

#[traced_test]
#[test]
fn accepted_subject_raises_no_aggregate() {
    let composite = CompositeValidator::new().with(rule_fn("accepts", |_: &u8| None::<String>));

    assert!(composite.validate(&1).is_ok());
    assert!(!logs_contain("raising aggregated rejection"));
}
