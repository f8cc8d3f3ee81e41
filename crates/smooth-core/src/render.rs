//! Textual snapshots of values placed in failure reports.

use std::any::type_name;
use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

const ELLIPSIS: &str = "...";

/// A value captured as its static type name and `Debug` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    /// Result of [`std::any::type_name`] for the value's static type.
    pub type_name: String,
    /// `Debug` rendering of the value.
    pub value: String,
}

impl Rendered {
    /// Captures the provided value.
    pub fn of<T: Debug + ?Sized>(value: &T) -> Self {
        Self {
            type_name: type_name::<T>().to_string(),
            value: format!("{value:?}"),
        }
    }

    /// Builds a rendering from pre-formatted parts.
    ///
    /// Used where the interesting text is not the `Debug` form, such as a
    /// panic payload or an error chain.
    pub fn raw(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            value: value.into(),
        }
    }

    /// Truncates the value text to `width` characters, appending `...`.
    pub fn truncated(mut self, width: usize) -> Self {
        if self.value.chars().count() > width {
            let mut cut: String = self.value.chars().take(width).collect();
            cut.push_str(ELLIPSIS);
            self.value = cut;
        }
        self
    }
}

impl Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) '{}'", self.type_name, self.value)
    }
}
