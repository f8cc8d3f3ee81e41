//! Failure taxonomy and the report delivered to a reporter.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::location::CallSite;
use crate::render::Rendered;

/// Which rule an assertion failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// Two collections differ in size.
    LengthMismatch,
    /// A collection element has no equal counterpart.
    ElementMismatch,
    /// An expected map key is absent from the actual map.
    KeyMissing,
    /// Two values failed their equality rule.
    ValueMismatch,
    /// An action panicked when it should have completed.
    UnexpectedPanic,
    /// An action completed when it should have panicked.
    MissingPanic,
    /// The expected error does not occur in the source chain.
    ErrorChainMiss,
    /// A value was present when absence was expected.
    NilExpected,
    /// A value was absent when presence was expected.
    NonNilExpected,
    /// A boolean had the wrong value.
    BooleanMismatch,
}

impl FailureKind {
    /// Stable machine readable code for the kind.
    pub fn code(self) -> &'static str {
        match self {
            FailureKind::LengthMismatch => "length-mismatch",
            FailureKind::ElementMismatch => "element-mismatch",
            FailureKind::KeyMissing => "key-missing",
            FailureKind::ValueMismatch => "value-mismatch",
            FailureKind::UnexpectedPanic => "unexpected-panic",
            FailureKind::MissingPanic => "missing-panic",
            FailureKind::ErrorChainMiss => "error-chain-miss",
            FailureKind::NilExpected => "nil-expected",
            FailureKind::NonNilExpected => "non-nil-expected",
            FailureKind::BooleanMismatch => "boolean-mismatch",
        }
    }
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Everything needed to explain one failed assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    /// Rule that was not satisfied.
    pub kind: FailureKind,
    /// Test code position that invoked the assertion.
    pub location: CallSite,
    /// Human readable description of the failed rule.
    pub description: String,
    /// Value the test expected.
    pub expected: Rendered,
    /// Value the test observed.
    pub got: Rendered,
    /// Additional discrepancies collected by the same assertion.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl FailureReport {
    /// Creates a report without additional details.
    pub fn new(
        kind: FailureKind,
        location: CallSite,
        description: impl Into<String>,
        expected: Rendered,
        got: Rendered,
    ) -> Self {
        Self {
            kind,
            location,
            description: description.into(),
            expected,
            got,
            details: Vec::new(),
        }
    }

    /// Attaches detail lines to the report.
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

impl Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error | File {} Line {} | {}\nExpected: {}\nGot     : {}",
            self.location.file, self.location.line, self.description, self.expected, self.got
        )?;
        for detail in &self.details {
            write!(f, "\n  - {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FailureReport {}
