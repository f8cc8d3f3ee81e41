use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SmoothError};
use crate::failure::FailureReport;
use crate::serde::from_json_slice;

/// Environment variable naming a JSON policy file.
pub const POLICY_ENV: &str = "SMOOTH_POLICY";

/// How collection assertions treat discrepancies after the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DiscrepancyMode {
    /// Halt on the first discrepancy.
    #[default]
    First,
    /// Collect every discrepancy into a single report.
    All,
}

/// Reporting policy applied to every failure a reporter receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Discrepancy handling for sequence and map assertions.
    #[serde(default)]
    pub discrepancies: DiscrepancyMode,
    /// Maximum number of detail lines kept on a report.
    #[serde(default = "Policy::default_max_details")]
    pub max_details: usize,
    /// Optional character cap for rendered values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value_width: Option<usize>,
}

impl Policy {
    const fn default_max_details() -> usize {
        32
    }

    /// Returns whether collection assertions should keep going after a discrepancy.
    pub fn collect_all(&self) -> bool {
        self.discrepancies == DiscrepancyMode::All
    }

    /// Parses a policy from JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, SmoothError> {
        let policy: Self = from_json_slice(data)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Reads a policy from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SmoothError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| {
            SmoothError::Io(
                ErrorInfo::new("policy-read", err.to_string())
                    .at(path.display().to_string()),
            )
        })?;
        Self::from_json_slice(&bytes)
    }

    /// Loads the policy named by `SMOOTH_POLICY`, or the default when unset.
    pub fn from_env() -> Result<Self, SmoothError> {
        match env::var_os(POLICY_ENV) {
            Some(path) if !path.is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), SmoothError> {
        if self.max_details == 0 && self.collect_all() {
            return Err(SmoothError::Config(
                ErrorInfo::new(
                    "policy-max-details",
                    "collecting all discrepancies requires max_details > 0",
                )
                .with_hint("raise max_details or use the `first` discrepancy mode"),
            ));
        }
        if self.max_value_width == Some(0) {
            return Err(SmoothError::Config(ErrorInfo::new(
                "policy-value-width",
                "max_value_width must be positive when set",
            )));
        }
        Ok(())
    }

    /// Applies truncation and detail caps to a report.
    pub fn shape(&self, mut report: FailureReport) -> FailureReport {
        if let Some(width) = self.max_value_width {
            report.expected = report.expected.truncated(width);
            report.got = report.got.truncated(width);
        }
        if report.details.len() > self.max_details {
            let overflow = report.details.len() - self.max_details;
            report.details.truncate(self.max_details);
            report.details.push(format!("... {overflow} more"));
        }
        report
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            discrepancies: DiscrepancyMode::default(),
            max_details: Self::default_max_details(),
            max_value_width: None,
        }
    }
}
