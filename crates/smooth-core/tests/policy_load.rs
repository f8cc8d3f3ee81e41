use std::fs;

use smooth_core::{DiscrepancyMode, Policy, SmoothError, POLICY_ENV};

#[test]
fn loads_policy_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("policy.json");
    fs::write(&path, br#"{"discrepancies": "all", "max_details": 8}"#).expect("write");

    let policy = Policy::load(&path).expect("load");
    assert_eq!(policy.discrepancies, DiscrepancyMode::All);
    assert_eq!(policy.max_details, 8);
    assert_eq!(policy.max_value_width, None);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Policy::load(dir.path().join("absent.json")).unwrap_err();
    match err {
        SmoothError::Io(info) => {
            assert_eq!(info.code, "policy-read");
            let path = info.path.expect("path recorded");
            assert!(path.ends_with("absent.json"));
        }
        other => panic!("unexpected error family: {other}"),
    }
}

#[test]
fn collect_all_requires_room_for_details() {
    let err = Policy::from_json_slice(br#"{"discrepancies": "all", "max_details": 0}"#)
        .unwrap_err();
    assert!(matches!(err, SmoothError::Config(_)));
}

// The only test in this binary touching the environment.
#[test]
fn env_variable_selects_policy_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("env-policy.json");
    fs::write(&path, br#"{"max_value_width": 16}"#).expect("write");

    std::env::remove_var(POLICY_ENV);
    assert_eq!(Policy::from_env().expect("default"), Policy::default());

    std::env::set_var(POLICY_ENV, &path);
    let policy = Policy::from_env().expect("env policy");
    std::env::remove_var(POLICY_ENV);
    assert_eq!(policy.max_value_width, Some(16));
}
