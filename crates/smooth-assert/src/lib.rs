#![deny(missing_docs)]
//! Assertion helpers for unit tests.
//!
//! Every assertion takes a [`Reporter`] first. On success it returns with no
//! side effect; on failure it builds a [`FailureReport`] pointing at the
//! calling line and hands it to the reporter, which halts the current test
//! unit without touching its siblings.
//!
//! ```
//! use smooth_assert::{eq, slices_match_unordered, Panicking};
//!
//! let mut t = Panicking::new();
//! eq(&mut t, 4, 2 + 2);
//! slices_match_unordered(&mut t, &[1, 1, 2], &[2, 1, 1]);
//! ```

/// The `Absent` capability and nil assertions.
pub mod absence;
/// Error source-chain assertions.
pub mod chain;
/// Sequence and mapping assertions.
pub mod collections;
/// Scalar equality and boolean assertions.
pub mod equality;
/// Panic interception assertions.
pub mod panics;
/// The halting-report seam and the libtest reporter.
pub mod reporter;
/// In-process units and suites.
pub mod unit;

pub use absence::{is_nil, is_not_nil, Absent};
pub use chain::{causes, contains_error, contains_error_type};
pub use collections::{maps_match, slices_match, slices_match_unordered, Mapping};
pub use equality::{eq, eq_by, eq_float, eq_one_of, is_false, is_true, neq, Float};
pub use panics::{no_panic, panics};
pub use reporter::{Panicking, Reporter};
pub use unit::{Suite, SuiteReport, SuiteTotals, TestUnit, UnitOutcome, UnitStatus};

pub use smooth_core::{
    CallSite, DiscrepancyMode, FailureKind, FailureReport, Policy, Rendered, SmoothError,
};
