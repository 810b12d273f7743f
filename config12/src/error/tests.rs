//! Unit tests for error construction, aggregation and display.

use rstest::rstest;

use super::{FieldParseError, OverlayError};
use crate::ValueKind;

fn parse_error(key: &str, raw: &str) -> FieldParseError {
    let Err(source) = raw.parse::<i64>() else {
        panic!("{raw:?} unexpectedly parsed as an integer");
    };
    FieldParseError::new("field", key.to_owned(), raw.to_owned(), source)
}

#[rstest]
fn try_aggregate_returns_none_for_no_errors() {
    assert!(OverlayError::try_aggregate(Vec::new()).is_none());
}

#[rstest]
fn try_aggregate_unwraps_single_error() {
    let err = OverlayError::try_aggregate([parse_error("PORT", "x")]);
    assert!(
        matches!(&err, Some(OverlayError::FieldParse(e)) if e.external_key == "PORT"),
        "expected FieldParse, got {err:?}"
    );
}

#[rstest]
fn try_aggregate_combines_multiple_errors() {
    let err = OverlayError::try_aggregate([parse_error("A", "x"), parse_error("B", "y")]);
    let Some(OverlayError::Aggregate(agg)) = err else {
        panic!("expected Aggregate, got {err:?}");
    };
    assert_eq!(agg.len(), 2);
    let keys: Vec<_> = agg.iter().map(|e| e.external_key.as_str()).collect();
    assert_eq!(keys, ["A", "B"]);
}

#[rstest]
fn aggregate_display_numbers_each_error() {
    let aggregated = OverlayError::try_aggregate([parse_error("A", "x"), parse_error("B", "y")]);
    let Some(err) = aggregated else {
        panic!("expected an error");
    };
    let text = err.to_string();
    assert!(
        text.starts_with("multiple configuration errors:\n1: "),
        "{text}"
    );
    assert!(text.contains("\n2: expected integer for B"), "{text}");
}

#[rstest]
fn parse_error_display_names_key_and_raw_value() {
    let err = parse_error("INVALID_INT", "not a number");
    assert_eq!(
        err.to_string(),
        "expected integer for INVALID_INT (field `field`), got \"not a number\""
    );
}

#[rstest]
#[case::field(OverlayError::FieldParse(parse_error("A", "x")), 1)]
#[case::not_record(OverlayError::not_a_record::<String>(ValueKind::Scalar), 0)]
fn parse_errors_exposes_structured_failures(#[case] err: OverlayError, #[case] expected: usize) {
    assert_eq!(err.parse_errors().count(), expected);
}

#[rstest]
fn not_a_record_reports_type_and_kind() {
    let err = OverlayError::not_a_record::<Vec<u8>>(ValueKind::Sequence);
    let text = err.to_string();
    assert!(
        text.starts_with("expected a struct with named fields, got sequence `"),
        "{text}"
    );
    assert!(text.contains("Vec<u8>"), "{text}");
}
