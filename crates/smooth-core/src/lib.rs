#![deny(missing_docs)]
#![doc = "Failure reports, caller locations, reporting policy, and error types shared by the smooth assertion crates."]

pub mod errors;
pub mod failure;
pub mod location;
/// Reporting policy and its configuration loaders.
pub mod policy;
pub mod render;
/// Canonical JSON helpers.
pub mod serde;

pub use errors::{ErrorInfo, SmoothError};
pub use failure::{FailureKind, FailureReport};
pub use location::CallSite;
pub use policy::{DiscrepancyMode, Policy, POLICY_ENV};
pub use render::Rendered;
