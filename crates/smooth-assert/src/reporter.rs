use smooth_core::{FailureReport, Policy, SmoothError};
use tracing::debug;

/// Sink that receives failure reports and stops the current test unit.
///
/// Implementations must mark the unit failed and must not return control to
/// the assertion, but must never abort the process: sibling units keep
/// running.
pub trait Reporter {
    /// Policy used to shape reports before delivery.
    fn policy(&self) -> &Policy;

    /// Records the failure and halts the current unit.
    fn fail(&mut self, report: FailureReport) -> !;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn policy(&self) -> &Policy {
        (**self).policy()
    }

    fn fail(&mut self, report: FailureReport) -> ! {
        (**self).fail(report)
    }
}

/// Reporter for ordinary `#[test]` functions.
///
/// Failing panics with the rendered report; libtest marks that test failed
/// and carries on with the rest of the suite.
#[derive(Debug, Clone, Default)]
pub struct Panicking {
    policy: Policy,
}

impl Panicking {
    /// Creates a reporter with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reporter with an explicit policy.
    pub fn with_policy(policy: Policy) -> Self {
        Self { policy }
    }

    /// Creates a reporter using the policy named by `SMOOTH_POLICY`.
    pub fn from_env() -> Result<Self, SmoothError> {
        Ok(Self::with_policy(Policy::from_env()?))
    }
}

impl Reporter for Panicking {
    fn policy(&self) -> &Policy {
        &self.policy
    }

    fn fail(&mut self, report: FailureReport) -> ! {
        debug!(
            code = report.kind.code(),
            location = %report.location,
            "assertion failed"
        );
        panic!("{report}")
    }
}

/// Shapes the report with the reporter's policy and hands it over.
pub(crate) fn halt<R: Reporter + ?Sized>(t: &mut R, report: FailureReport) -> ! {
    let report = t.policy().shape(report);
    t.fail(report)
}
