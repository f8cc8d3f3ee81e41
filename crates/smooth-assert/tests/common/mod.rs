#![allow(dead_code)]

use smooth_assert::{FailureReport, Policy, TestUnit, UnitStatus};

pub fn failure_with<F>(policy: Policy, body: F) -> FailureReport
where
    F: FnOnce(&mut TestUnit),
{
    match TestUnit::run("unit-under-test", policy, body).status {
        UnitStatus::Failed { report } => report,
        other => panic!("expected an assertion failure, unit ended as {other:?}"),
    }
}

pub fn failure_of<F>(body: F) -> FailureReport
where
    F: FnOnce(&mut TestUnit),
{
    failure_with(Policy::default(), body)
}

pub fn assert_passes<F>(body: F)
where
    F: FnOnce(&mut TestUnit),
{
    let outcome = TestUnit::run("unit-under-test", Policy::default(), body);
    assert_eq!(outcome.status, UnitStatus::Passed);
}
