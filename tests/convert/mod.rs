use validation_rail::convert::{collect_errors, first_error, rejection_to_result, validated};
use validation_rail::validator::{rule_fn, CompositeValidator, Validator};
use validation_rail::{fault, Failure, Lazy, ValidationFailed, ValidationResult};

#[test]
fn collect_errors_on_each_outcome() {
    let accepted: ValidationResult<()> = Ok(());
    assert_eq!(collect_errors(accepted).unwrap(), Vec::<String>::new());

    let rejected: ValidationResult<()> =
        Err(ValidationFailed::<_, String>::new((), vec!["a", "b"]).unwrap().into());
    assert_eq!(collect_errors(rejected).unwrap(), ["a", "b"]);

    let faulted: ValidationResult<()> = Err(Failure::from(fault!("down")));
    assert_eq!(collect_errors(faulted).unwrap_err().message(), "down");
}

#[test]
fn collect_errors_flattens_composites() {
    let composite = CompositeValidator::new()
        .with(rule_fn("one", |_: &u8| "one"))
        .with(rule_fn("two", |_: &u8| vec!["two".to_string(), "three".to_string()]));

    assert_eq!(collect_errors(composite.validate(&0)).unwrap(), ["one", "two", "three"]);
}

#[test]
fn rejection_to_result_maps_only_errors() {
    let ok: Result<&str, ValidationFailed<u8>> = Ok("kept");
    assert_eq!(rejection_to_result(ok), Ok("kept"));

    let err: Result<&str, ValidationFailed<u8>> = Err(ValidationFailed::new(1, "bad").unwrap());
    assert_eq!(rejection_to_result(err), Err(vec!["bad".to_string()]));
}

#[test]
fn first_error_reads_a_single_entry() {
    let rejection = ValidationFailed::new(0, Lazy::new((0u32..).map(|n| n + 100))).unwrap();
    assert_eq!(first_error(&rejection), Some(100));
    assert_eq!(first_error(&rejection), Some(100));
}

#[test]
fn validated_returns_the_subject_on_acceptance() {
    let short = rule_fn("short", |s: &String| (s.len() > 4).then(|| "too long".to_string()));

    assert_eq!(validated(&short, "abc".to_string()).unwrap(), "abc");

    let failure = validated(&short, "abcdef".to_string()).unwrap_err();
    assert_eq!(*failure.into_rejection().unwrap().subject(), "abcdef");
}
