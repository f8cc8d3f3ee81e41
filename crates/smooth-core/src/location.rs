//! Source positions of assertion call sites.

use std::fmt::{self, Display};
use std::panic::Location;

use serde::{Deserialize, Serialize};

/// File and line of the test code that invoked an assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallSite {
    /// Source file as reported by the compiler.
    pub file: String,
    /// One-based line number.
    pub line: u32,
    /// One-based column number.
    pub column: u32,
}

impl CallSite {
    /// Creates a call site from explicit coordinates.
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Captures the location of the outermost `#[track_caller]` frame.
    ///
    /// Must be called directly in the body of the tracked function; calls
    /// from inside a closure report the closure instead.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&Location<'_>> for CallSite {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
