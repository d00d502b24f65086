//! Completion percentage for the pipeline progress bar.

use crate::stage::{Stage, resolve_stage};
use crate::types::{Analysis, AnalysisStatus, Enrichment, EnrichmentStatus};

const SUBMISSION_PCT: u8 = 10;
const ENRICHMENT_PENDING_PCT: u8 = 20;
const ENRICHMENT_FINISHED_PCT: u8 = 45;
const ENRICHMENT_APPROVED_PCT: u8 = 55;
const ANALYSIS_PENDING_PCT: u8 = 65;
const ANALYSIS_COMPLETED_PCT: u8 = 85;
const ANALYSIS_APPROVED_PCT: u8 = 95;
const COMPLETE_PCT: u8 = 100;

/// Map the pipeline state to a fixed percentage band in `[0, 100]`.
///
/// Monotonically non-decreasing along every valid forward transition, which
/// is what keeps the progress bar from jumping backwards. `Failed` and
/// `Unknown` statuses report the pending band of their stage so a retry
/// never shows regressed progress relative to entering that stage.
pub fn estimate_progress(enrichment: Option<&Enrichment>, analysis: Option<&Analysis>) -> u8 {
  match resolve_stage(enrichment, analysis) {
    Stage::Submission => SUBMISSION_PCT,
    Stage::Enrichment => match enrichment.map(|e| e.status) {
      Some(EnrichmentStatus::Finished) => ENRICHMENT_FINISHED_PCT,
      Some(EnrichmentStatus::Approved) => ENRICHMENT_APPROVED_PCT,
      // Pending, Failed, Unknown. None is unreachable at this stage but
      // keeps the match total.
      _ => ENRICHMENT_PENDING_PCT,
    },
    Stage::Analysis => match analysis.map(|a| a.status) {
      Some(AnalysisStatus::Completed) => ANALYSIS_COMPLETED_PCT,
      Some(AnalysisStatus::Approved) => ANALYSIS_APPROVED_PCT,
      // Pending, Failed, Unknown; Sent resolves to Complete above.
      _ => ANALYSIS_PENDING_PCT,
    },
    Stage::Complete => COMPLETE_PCT,
  }
}
