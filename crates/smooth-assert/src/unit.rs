use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use smooth_core::serde::to_canonical_json_bytes;
use smooth_core::{FailureReport, Policy, SmoothError};
use tracing::{debug, warn};

use crate::panics::payload_message;
use crate::reporter::Reporter;

/// Unwind payload used by [`TestUnit`] to stop the running body.
struct Halted;

/// Whether a caught unwind is a unit halting rather than a real panic.
pub(crate) fn is_halt(payload: &(dyn Any + Send)) -> bool {
    payload.is::<Halted>()
}

/// Reporting context for one test unit run by [`Suite`] or [`TestUnit::run`].
#[derive(Debug)]
pub struct TestUnit {
    name: String,
    policy: Policy,
    failure: Option<FailureReport>,
}

impl TestUnit {
    fn new(name: String, policy: Policy) -> Self {
        Self {
            name,
            policy,
            failure: None,
        }
    }

    /// Name the unit was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an assertion has failed in this unit.
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Runs `body` as a unit and classifies how it ended.
    ///
    /// A failed assertion stops the body; a panic outside any assertion is
    /// recorded as a crash. Neither escapes this call.
    pub fn run<F>(name: impl Into<String>, policy: Policy, body: F) -> UnitOutcome
    where
        F: FnOnce(&mut TestUnit),
    {
        let mut unit = TestUnit::new(name.into(), policy);
        let result = panic::catch_unwind(AssertUnwindSafe(|| body(&mut unit)));
        let status = match (result, unit.failure.take()) {
            (_, Some(report)) => UnitStatus::Failed { report },
            (Ok(()), None) => UnitStatus::Passed,
            (Err(payload), None) => {
                let message = payload_message(payload.as_ref());
                warn!(unit = %unit.name, %message, "unit panicked outside an assertion");
                UnitStatus::Crashed { message }
            }
        };
        UnitOutcome {
            name: unit.name,
            status,
        }
    }
}

impl Reporter for TestUnit {
    fn policy(&self) -> &Policy {
        &self.policy
    }

    fn fail(&mut self, report: FailureReport) -> ! {
        debug!(unit = %self.name, code = report.kind.code(), "unit halted");
        self.failure = Some(report);
        panic::resume_unwind(Box::new(Halted))
    }
}

/// How a unit ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum UnitStatus {
    /// Every assertion held.
    Passed,
    /// An assertion failed and halted the unit.
    Failed {
        /// The single report that halted the unit.
        report: FailureReport,
    },
    /// The body panicked outside of any assertion.
    Crashed {
        /// Panic payload text.
        message: String,
    },
}

/// Result of running one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOutcome {
    /// Unit name.
    pub name: String,
    /// Final status.
    #[serde(flatten)]
    pub status: UnitStatus,
}

impl UnitOutcome {
    /// Whether the unit passed.
    pub fn passed(&self) -> bool {
        matches!(self.status, UnitStatus::Passed)
    }

    /// The failure report, when an assertion halted the unit.
    pub fn report(&self) -> Option<&FailureReport> {
        match &self.status {
            UnitStatus::Failed { report } => Some(report),
            _ => None,
        }
    }
}

/// Count of units per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuiteTotals {
    /// Units that passed.
    pub passed: usize,
    /// Units halted by an assertion.
    pub failed: usize,
    /// Units that panicked outside assertions.
    pub crashed: usize,
}

/// Summary of a finished suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Hex sha256 of the canonical JSON of `units` and `totals`.
    pub digest: String,
    /// Outcomes in execution order.
    pub units: Vec<UnitOutcome>,
    /// Status counts.
    pub totals: SuiteTotals,
}

impl SuiteReport {
    fn new(units: Vec<UnitOutcome>) -> Result<Self, SmoothError> {
        let mut totals = SuiteTotals::default();
        for unit in &units {
            match unit.status {
                UnitStatus::Passed => totals.passed += 1,
                UnitStatus::Failed { .. } => totals.failed += 1,
                UnitStatus::Crashed { .. } => totals.crashed += 1,
            }
        }
        let bytes = to_canonical_json_bytes(&(&units, &totals))?;
        let digest = format!("{:x}", Sha256::digest(&bytes));
        Ok(Self {
            digest,
            units,
            totals,
        })
    }

    /// Whether every unit passed.
    pub fn all_passed(&self) -> bool {
        self.totals.failed == 0 && self.totals.crashed == 0
    }

    /// Canonical JSON encoding of the report.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SmoothError> {
        to_canonical_json_bytes(self)
    }
}

/// Runs independent units in order, isolating failures between them.
#[derive(Debug, Default)]
pub struct Suite {
    policy: Policy,
    outcomes: Vec<UnitOutcome>,
}

impl Suite {
    /// Creates an empty suite whose units share `policy`.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            outcomes: Vec::new(),
        }
    }

    /// Runs one unit and records its outcome.
    pub fn run<F>(&mut self, name: impl Into<String>, body: F) -> &UnitOutcome
    where
        F: FnOnce(&mut TestUnit),
    {
        let outcome = TestUnit::run(name, self.policy.clone(), body);
        debug!(unit = %outcome.name, passed = outcome.passed(), "unit finished");
        self.outcomes.push(outcome);
        &self.outcomes[self.outcomes.len() - 1]
    }

    /// Outcomes recorded so far.
    pub fn outcomes(&self) -> &[UnitOutcome] {
        &self.outcomes
    }

    /// Consumes the suite and summarises it.
    pub fn finish(self) -> Result<SuiteReport, SmoothError> {
        SuiteReport::new(self.outcomes)
    }
}
