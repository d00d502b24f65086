//! Farol
//!
//! State derivation for a strategic-analysis pipeline. A submission moves
//! from intake through enrichment, analysis, review and delivery; the
//! surrounding application fetches `Enrichment` and `Analysis` snapshots,
//! hands them to the resolvers re-exported here, and renders whatever comes
//! back. The access gate decides, independently of the pipeline, which
//! report sections a caller may see.
//!
//! Everything is pure: no I/O, no mutation of inputs, no state between
//! calls. Concurrent-admin staleness is handled by the persistence layer,
//! which only ever feeds this library consistent snapshots.

pub use farol_access::{AccessContext, AccessLevel, Role, framework_access, is_field_visible};
pub use farol_workflow::{
  ActionKind, Analysis, AnalysisStatus, Enrichment, EnrichmentStatus, NextAction, Stage,
  StatusParseError, Submission, estimate_progress, labels, resolve_next_action, resolve_stage,
};
