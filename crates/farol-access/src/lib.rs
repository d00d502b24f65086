//! Farol Access
//!
//! Monetization gate over the framework sections of a delivered report.
//! Orthogonal to the workflow pipeline: this crate decides what a caller
//! may *see*, never where a submission *is*. Decisions are pure lookups
//! against a static policy table plus an explicit caller context; nothing
//! here reads ambient state.

mod context;
mod policy;

pub use context::{AccessContext, Role};
pub use policy::{AccessLevel, framework_access, is_field_visible};
