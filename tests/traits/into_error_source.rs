use std::borrow::Cow;

use validation_rail::traits::IntoErrorSource;
use validation_rail::{ErrorSource, ErrorVec, Lazy, SinglePass};

#[derive(Debug, Clone, PartialEq)]
struct FieldError {
    field: &'static str,
    reason: &'static str,
}

struct Violations(Vec<FieldError>);

impl IntoErrorSource<FieldError> for Violations {
    fn into_error_source(self) -> ErrorSource<FieldError> {
        ErrorSource::ordered(self.0)
    }
}

fn entries<E: validation_rail::ErrorEntry, V: IntoErrorSource<E>>(value: V) -> Vec<E> {
    value.into_error_source().sequence().collect()
}

#[test]
fn string_like_values_are_single_entries() {
    assert_eq!(entries::<String, _>("a"), ["a"]);
    assert_eq!(entries::<String, _>(String::from("b")), ["b"]);
    assert_eq!(entries::<String, _>(Cow::Borrowed("c")), ["c"]);
}

#[test]
fn containers_keep_order() {
    assert_eq!(entries::<String, _>(vec!["x", "y"]), ["x", "y"]);
    assert_eq!(entries(vec![3, 2, 1]), [3, 2, 1]);
    assert_eq!(entries([1, 2]), [1, 2]);

    let inline: ErrorVec<u8> = ErrorVec::from_slice(&[9, 8]);
    assert_eq!(entries(inline), [9, 8]);
}

#[test]
fn option_is_zero_or_one_entry() {
    assert!(entries(None::<u8>).is_empty());
    assert_eq!(entries(Some(4u8)), [4]);
}

#[test]
fn wrappers_are_adapted_lazily() {
    let lazy = Lazy::new((0..3).map(|n| n * 2));
    assert_eq!(entries(lazy.clone()), [0, 2, 4]);
    assert_eq!(lazy.into_inner().count(), 3);

    let once = SinglePass::new(vec![7, 8].into_iter());
    assert_eq!(entries(once), [7, 8]);
}

#[test]
fn error_source_converts_to_itself() {
    let source = ErrorSource::single(1u8);
    assert_eq!(entries(source.clone()), [1]);
    assert_eq!(entries(source), [1]);
}

#[test]
fn domain_types_can_implement_the_conversion() {
    let violations = Violations(vec![
        FieldError { field: "name", reason: "required" },
        FieldError { field: "age", reason: "negative" },
    ]);

    let collected = entries(violations);
    assert_eq!(collected.len(), 2);
    assert_eq!(collected[0].field, "name");
    assert_eq!(collected[1].reason, "negative");
}
