//! Farol Workflow
//!
//! Pure state derivation for the Farol analysis pipeline. A submission moves
//! through enrichment, analysis, review and delivery; this crate derives
//! everything the surrounding application needs to render that pipeline:
//!
//! - the coarse-grained [`Stage`] a submission is in,
//! - the single legal [`NextAction`] an admin can take,
//! - a monotonic completion percentage for progress bars,
//! - presentation labels keyed by the canonical enums.
//!
//! Every function here is total and side-effect free. Callers pass in
//! freshly fetched `Enrichment`/`Analysis` snapshots; identical inputs
//! always produce identical outputs. Staleness between two concurrent
//! admins is the persistence layer's problem, not ours.

mod action;
mod error;
pub mod labels;
mod progress;
mod stage;
mod types;

pub use action::{ActionKind, NextAction, resolve_next_action};
pub use error::StatusParseError;
pub use progress::estimate_progress;
pub use stage::{Stage, resolve_stage};
pub use types::{Analysis, AnalysisStatus, Enrichment, EnrichmentStatus, Submission};
