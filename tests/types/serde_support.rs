use validation_rail::{Failure, FailureKind, FailureReport, FaultPolicy, ValidationFailed, ValidatorId};

#[test]
fn validator_id_serializes_as_name() {
    let id = ValidatorId::new("email");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, r#"{"name":"email"}"#);

    let back: ValidatorId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn fault_policy_round_trips() {
    let json = serde_json::to_string(&FaultPolicy::Defer).unwrap();
    assert_eq!(json, r#""Defer""#);
    assert_eq!(serde_json::from_str::<FaultPolicy>(&json).unwrap(), FaultPolicy::Defer);
}

#[test]
fn failure_report_serializes_to_plain_data() {
    let failure: Failure<u8> = ValidationFailed::<_, String>::new(7, vec!["odd", "prime"])
        .unwrap()
        .with_validator("even")
        .set_code(422)
        .into();

    let value = serde_json::to_value(failure.report()).unwrap();
    assert_eq!(value["kind"], "Rejection");
    assert_eq!(value["code"], 422);
    assert_eq!(value["validator"]["name"], "even");
    assert_eq!(value["errors"], serde_json::json!(["odd", "prime"]));

    let back: FailureReport<String> = serde_json::from_value(value).unwrap();
    assert_eq!(back.kind, FailureKind::Rejection);
    assert_eq!(back.errors, ["odd", "prime"]);
}
