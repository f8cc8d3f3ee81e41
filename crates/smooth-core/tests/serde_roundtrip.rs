use smooth_core::serde::{from_json_slice, to_canonical_json_bytes};
use smooth_core::{CallSite, DiscrepancyMode, FailureKind, FailureReport, Policy, Rendered};

#[test]
fn failure_report_round_trip_json() {
    let report = FailureReport::new(
        FailureKind::LengthMismatch,
        CallSite::new("tests/sample.rs", 40, 9),
        "Slices do not match in length.",
        Rendered::of(&2_usize),
        Rendered::of(&3_usize),
    )
    .with_details(vec!["Values do not match | Index: 1".into()]);

    let bytes = to_canonical_json_bytes(&report).expect("serialize");
    let decoded: FailureReport = from_json_slice(&bytes).expect("deserialize");

    assert_eq!(decoded, report);
    assert_eq!(decoded.to_string(), report.to_string());
}

#[test]
fn canonical_bytes_sort_keys() {
    let policy = Policy {
        discrepancies: DiscrepancyMode::All,
        max_details: 4,
        max_value_width: Some(80),
    };
    let bytes = to_canonical_json_bytes(&policy).expect("serialize");
    let text = String::from_utf8(bytes).expect("utf8");
    assert_eq!(
        text,
        r#"{"discrepancies":"all","max_details":4,"max_value_width":80}"#
    );
}

#[test]
fn malformed_json_maps_to_serde_family() {
    let err = from_json_slice::<Policy>(b"{not json").unwrap_err();
    assert_eq!(err.info().code, "json-read");
}
