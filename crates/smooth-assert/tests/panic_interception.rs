mod common;

use std::cell::Cell;

use smooth_assert::{
    eq, no_panic, panics, FailureKind, FailureReport, Panicking, Policy, Reporter, TestUnit,
    UnitStatus,
};

use common::{assert_passes, failure_of};

/// Libtest-style reporter that counts how often it was asked to fail.
struct Counting<'a> {
    policy: Policy,
    calls: &'a Cell<usize>,
}

impl<'a> Counting<'a> {
    fn new(calls: &'a Cell<usize>) -> Self {
        Self {
            policy: Policy::default(),
            calls,
        }
    }
}

impl Reporter for Counting<'_> {
    fn policy(&self) -> &Policy {
        &self.policy
    }

    fn fail(&mut self, report: FailureReport) -> ! {
        self.calls.set(self.calls.get() + 1);
        panic!("{report}")
    }
}

#[test]
fn panicking_action_passes_and_is_contained() {
    let after = Cell::new(false);
    assert_passes(|t| {
        panics(t, || panic!("expected failure"));
        panics(t, || {
            let empty: Vec<u8> = Vec::new();
            std::hint::black_box(empty[3]);
        });
        after.set(true);
    });
    assert!(after.get());
}

#[test]
fn completing_action_fails_panics() {
    let report = failure_of(|t| panics(t, || {}));
    assert_eq!(report.kind, FailureKind::MissingPanic);
    assert_eq!(
        report.description,
        "The supplied function did not panic when it should have."
    );
}

#[test]
fn completing_action_passes_no_panic() {
    let ran = Cell::new(0);
    assert_passes(|t| {
        no_panic(t, || ran.set(ran.get() + 1));
        no_panic(t, || ran.set(ran.get() + 1));
    });
    assert_eq!(ran.get(), 2);
}

#[test]
fn panicking_action_fails_no_panic_without_propagating() {
    let outcome = TestUnit::run("no-panic", Policy::default(), |t| {
        no_panic(t, || panic!("disk on fire"));
    });
    match outcome.status {
        UnitStatus::Failed { report } => {
            assert_eq!(report.kind, FailureKind::UnexpectedPanic);
            assert_eq!(report.got.value, "disk on fire");
        }
        other => panic!("expected a reported failure, got {other:?}"),
    }
}

#[test]
fn libtest_reporter_survives_intercepted_panics() {
    let mut t = Panicking::new();
    panics(&mut t, || panic!("contained"));
    eq(&mut t, 1, 1);
}

#[test]
fn panic_payload_text_reaches_the_report() {
    let report = failure_of(|t| no_panic(t, || panic!("static text")));
    assert_eq!(report.got.value, "static text");

    let code = 7;
    let report = failure_of(|t| no_panic(t, || panic!("code {code}")));
    assert_eq!(report.got.value, "code 7");

    let report = failure_of(|t| no_panic(t, || std::panic::panic_any(42_u32)));
    assert_eq!(report.got.value, "<non-string panic payload>");
}

#[test]
fn unit_halting_inside_panics_action_keeps_unwinding() {
    let calls = Cell::new(0);
    let reached = Cell::new(false);
    let outcome = TestUnit::run("outer", Policy::default(), |t| {
        let mut inner = Counting::new(&calls);
        panics(&mut inner, || eq(t, 1, 2));
        reached.set(true);
    });
    assert!(!reached.get());
    assert_eq!(calls.get(), 0);
    let report = outcome.report().expect("outer unit halted");
    assert_eq!(report.kind, FailureKind::ValueMismatch);
    assert_eq!(report.got.value, "2");
}

#[test]
fn unit_halting_inside_no_panic_action_is_not_a_panic() {
    let calls = Cell::new(0);
    let outcome = TestUnit::run("outer", Policy::default(), |t| {
        let mut inner = Counting::new(&calls);
        no_panic(&mut inner, || eq(t, "a", "b"));
    });
    assert_eq!(calls.get(), 0);
    let report = outcome.report().expect("outer unit halted");
    assert_eq!(report.kind, FailureKind::ValueMismatch);
}
