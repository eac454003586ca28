use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use validation_rail::validator::{rule_fn, try_rule_fn, CompositeValidator, FaultPolicy, Validator};
use validation_rail::{fault, FailureKind, ValidationError};

fn faulting(name: &'static str) -> impl Validator<u8> + Send + Sync {
    try_rule_fn(name, move |_: &u8| -> Result<Vec<String>, ValidationError> {
        Err(fault!("{name} backend unavailable"))
    })
}

fn rejecting(name: &'static str, entry: &'static str) -> impl Validator<u8> + Send + Sync {
    rule_fn(name, move |_: &u8| entry)
}

fn counting(calls: &Arc<AtomicUsize>) -> impl Validator<u8> + Send + Sync {
    let calls = Arc::clone(calls);
    rule_fn("counting", move |_: &u8| {
        calls.fetch_add(1, Ordering::SeqCst);
        None::<String>
    })
}

#[test]
fn default_policy_is_abort() {
    assert_eq!(FaultPolicy::default(), FaultPolicy::Abort);
    assert_eq!(CompositeValidator::<u8>::new().policy(), FaultPolicy::Abort);
}

#[test]
fn abort_stops_at_first_fault_and_wraps_it() {
    let calls = Arc::new(AtomicUsize::new(0));
    let composite = CompositeValidator::new()
        .named("outer")
        .with(rejecting("r1", "bad"))
        .with(faulting("db"))
        .with(counting(&calls));

    let fault = composite.validate(&1).unwrap_err().into_fault().unwrap();

    assert_eq!(fault.validator().unwrap().name(), "outer");
    assert_eq!(fault.message(), "a child validator could not complete evaluation");
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let child = fault.cause().and_then(|cause| cause.downcast_ref::<ValidationError>()).unwrap();
    assert_eq!(child.message(), "db backend unavailable");
    assert_eq!(child.validator().unwrap().name(), "db");
}

#[test]
fn defer_prefers_rejections_over_faults() {
    let calls = Arc::new(AtomicUsize::new(0));
    let composite = CompositeValidator::new()
        .fault_policy(FaultPolicy::Defer)
        .with(faulting("db"))
        .with(rejecting("r1", "bad"))
        .with(counting(&calls))
        .with(rejecting("r2", "worse"));

    let rejection = composite.validate(&1).unwrap_err().into_rejection().unwrap();

    assert_eq!(rejection.errors().collect::<Vec<_>>(), ["bad", "worse"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let deferred = rejection.deferred_faults();
    assert_eq!(deferred.len(), 1);
    assert_eq!(deferred[0].message(), "db backend unavailable");
    assert_eq!(deferred[0].validator().unwrap().name(), "db");
}

#[test]
fn defer_keeps_every_fault_in_the_report() {
    let composite = CompositeValidator::new()
        .named("outer")
        .fault_policy(FaultPolicy::Defer)
        .with(faulting("db"))
        .with(rejecting("r", "bad"))
        .with(faulting("cache"));

    let report = composite.validate(&1).unwrap_err().report();

    assert_eq!(report.kind, FailureKind::Rejection);
    assert_eq!(report.errors, ["bad"]);
    assert_eq!(
        report.deferred_faults,
        ["[db] db backend unavailable", "[cache] cache backend unavailable"]
    );
}

#[test]
fn rejections_without_faults_defer_nothing() {
    let composite = CompositeValidator::new()
        .fault_policy(FaultPolicy::Defer)
        .with(rejecting("r", "bad"));

    let rejection = composite.validate(&1).unwrap_err().into_rejection().unwrap();
    assert!(rejection.deferred_faults().is_empty());
}

#[test]
fn defer_surfaces_first_fault_when_nothing_rejected() {
    let composite = CompositeValidator::new()
        .named("outer")
        .fault_policy(FaultPolicy::Defer)
        .with(faulting("first"))
        .with(faulting("second"));

    let fault = composite.validate(&1).unwrap_err().into_fault().unwrap();
    let child = fault.cause().and_then(|cause| cause.downcast_ref::<ValidationError>()).unwrap();

    assert_eq!(fault.validator().unwrap().name(), "outer");
    assert_eq!(child.message(), "first backend unavailable");
}

#[test]
fn fault_chain_is_walkable_with_std_error() {
    use std::error::Error;

    let composite = CompositeValidator::new().named("outer").with(faulting("db"));
    let failure = composite.validate(&1).unwrap_err();

    let mut chain = Vec::new();
    let mut next: Option<&dyn Error> = Some(&failure);
    while let Some(err) = next {
        chain.push(err.to_string());
        next = err.source();
    }

    assert_eq!(
        chain,
        ["[outer] a child validator could not complete evaluation", "[db] db backend unavailable"]
    );
}
