//! Errors raised by smooth's own plumbing: policy loading and report
//! encoding. Assertion failures never travel this way; they reach a reporter
//! as [`FailureReport`](crate::FailureReport)s.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload carried by every [`SmoothError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable code, e.g. `policy-read` or `json-read`.
    pub code: String,
    /// What went wrong.
    pub message: String,
    /// Policy file involved, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Suggested fix for an invalid policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a payload with no path or hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            hint: None,
        }
    }

    /// Names the policy file the error concerns.
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attaches a suggested fix.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(path) = &self.path {
            write!(f, " in {path}")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

/// Error type for everything in smooth that is not an assertion failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SmoothError {
    /// A policy parsed but failed validation.
    #[error("invalid policy: {0}")]
    Config(ErrorInfo),
    /// JSON encoding or decoding failed.
    #[error("json: {0}")]
    Serde(ErrorInfo),
    /// A policy file could not be read.
    #[error("io: {0}")]
    Io(ErrorInfo),
}

impl SmoothError {
    /// Payload of whichever family this is.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SmoothError::Config(info) | SmoothError::Serde(info) | SmoothError::Io(info) => info,
        }
    }
}
