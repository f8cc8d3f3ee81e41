use smooth_core::{CallSite, FailureKind, FailureReport, Rendered};

fn sample() -> FailureReport {
    FailureReport::new(
        FailureKind::ValueMismatch,
        CallSite::new("src/lib.rs", 12, 5),
        "The supplied values were not equal but were expected to be.",
        Rendered::of(&1_u8),
        Rendered::of(&2_u8),
    )
}

#[track_caller]
fn tracked() -> CallSite {
    CallSite::caller()
}

#[test]
fn renders_three_line_shape() {
    assert_eq!(
        sample().to_string(),
        "Error | File src/lib.rs Line 12 | The supplied values were not equal but were expected to be.\n\
         Expected: (u8) '1'\n\
         Got     : (u8) '2'"
    );
}

#[test]
fn details_follow_the_got_line() {
    let report = sample().with_details(vec!["first".into(), "second".into()]);
    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[3], "  - first");
    assert_eq!(lines[4], "  - second");
}

#[test]
fn kind_codes_serialize_as_codes() {
    for kind in [
        FailureKind::ErrorChainMiss,
        FailureKind::KeyMissing,
        FailureKind::NonNilExpected,
    ] {
        let json = serde_json::to_string(&kind).expect("encode");
        assert_eq!(json, format!("\"{}\"", kind.code()));
        assert_eq!(kind.to_string(), kind.code());
    }
}

#[test]
fn caller_points_at_invoking_line() {
    let expected_line = line!() + 1;
    let site = tracked();
    assert_eq!(site.line, expected_line);
    assert!(site.file.ends_with("report_format.rs"));
    assert_eq!(site.to_string(), format!("{}:{}:{}", site.file, site.line, site.column));
}

#[test]
fn rendering_captures_type_and_debug_text() {
    let rendered = Rendered::of(&5_i32);
    assert_eq!(rendered.type_name, "i32");
    assert_eq!(rendered.to_string(), "(i32) '5'");
    assert_eq!(Rendered::of("hi").value, "\"hi\"");
}

#[test]
fn truncation_counts_characters() {
    let rendered = Rendered::raw("str", "héllo world").truncated(5);
    assert_eq!(rendered.value, "héllo...");
    let short = Rendered::raw("str", "hi").truncated(5);
    assert_eq!(short.value, "hi");
}
