use super::*;
use crate::model::variant::Variant;
use std::io::Cursor;

fn stream(variant: Variant, input: &str) -> (Result<StreamSummary, StreamError>, String) {
    let transformer = Transformer::new(variant);
    let mut out = Vec::new();
    let result = run_stream(&transformer, Cursor::new(input), &mut out);
    (result, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn one_output_line_per_input_line() {
    let input = "1.5 0 1 0.5 0 1 0 0 1 0 0\n0.5 0 1 0.5 0 1 0 0 1 1 0\n0.5 0 1 0 0 1 0 0 1 0 1\n";
    let (result, out) = stream(Variant::Basic, input);
    let summary = result.expect("stream");
    assert_eq!(out, "90 255\n90 255\n0 0\n");
    assert_eq!(summary.records, 3);
    assert_eq!(summary.turbo_records, 1);
    assert_eq!(summary.adjust_records, 1);
    assert_eq!(summary.angle_min, Some(0));
    assert_eq!(summary.angle_max, Some(90));
    assert_eq!(summary.speed_min, Some(0));
    assert_eq!(summary.speed_max, Some(255));
}

#[test]
fn last_line_without_newline_is_processed() {
    let (result, out) = stream(Variant::BasicUnsigned, "5000 0 1 0.5 0 1");
    assert_eq!(result.expect("stream").records, 1);
    assert_eq!(out, "0 255\n");
}

#[test]
fn empty_input_is_clean() {
    let (result, out) = stream(Variant::Extended, "");
    assert_eq!(result.expect("stream"), StreamSummary::default());
    assert!(out.is_empty());
}

#[test]
fn malformed_record_stops_without_output_for_it() {
    let input = "1.5 0 1 0.5 0 1 0 0 1 0 0\n1 0 1 0 0 1 0 0 1\n1.5 0 1 0.5 0 1 0 0 1 0 0\n";
    let (result, out) = stream(Variant::Basic, input);
    assert_eq!(out, "90 255\n");
    match result {
        Err(StreamError::Record { line, reason }) => {
            assert_eq!(line, 2);
            assert_eq!(
                reason,
                RecordError::Malformed {
                    expected: 11,
                    found: 9
                }
            );
        }
        other => panic!("expected record error, got {other:?}"),
    }
}

#[test]
fn zero_width_calibration_stops_the_stream() {
    let (result, out) = stream(Variant::BasicUnsigned, "0 1 1 0 0 1\n");
    assert!(out.is_empty());
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        StreamError::Record {
            line: 1,
            reason: RecordError::InvalidCalibration { .. }
        }
    ));
    assert!(err.to_string().starts_with("line 1: invalid calibration for axis x"));
}

#[test]
fn validate_counts_without_writing() {
    let transformer = Transformer::new(Variant::Extended);
    let input = "1 0 1 1 0 1 0.5 0 1 90 0 0 1 0 0\n1 0 1 0.5 0 1 0.5 0 1 90 1 0 1 1 0\n";
    let summary = validate_stream(&transformer, Cursor::new(input)).expect("validate");
    assert_eq!(summary.records, 2);
    assert_eq!(summary.speed_min, Some(0));
    assert_eq!(summary.speed_max, Some(255));
    assert_eq!(summary.turbo_records, 1);
}

#[test]
fn record_error_is_reported_once() {
    use std::error::Error;

    let (result, _) = stream(Variant::BasicUnsigned, "0 0 1\n");
    let err = result.unwrap_err();
    assert!(err.source().is_none());
    assert_eq!(
        err.to_string(),
        "line 1: malformed record: expected 6 fields, found 3"
    );
}
