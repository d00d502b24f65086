//! Stage derivation for the analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::types::{Analysis, AnalysisStatus, Enrichment, EnrichmentStatus};

/// Coarse-grained position of a submission in the pipeline.
///
/// Drives the 4-step progress indicator. Ordered by pipeline position so
/// stages compare with `<`/`>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
  Submission,
  Enrichment,
  Analysis,
  Complete,
}

impl Stage {
  /// All stages in pipeline order, for step indicators.
  pub const ALL: [Stage; 4] = [
    Stage::Submission,
    Stage::Enrichment,
    Stage::Analysis,
    Stage::Complete,
  ];

  /// 1-based position for the step indicator.
  pub fn step(&self) -> u8 {
    match self {
      Stage::Submission => 1,
      Stage::Enrichment => 2,
      Stage::Analysis => 3,
      Stage::Complete => 4,
    }
  }
}

/// Derive the current stage from the two sub-resource snapshots.
///
/// Rules are evaluated in strict priority order; the first match wins:
/// 1. analysis `Sent` -> `Complete`, regardless of the enrichment.
/// 2. enrichment `Approved` and an analysis exists -> `Analysis`.
/// 3. an enrichment exists (any status) -> `Enrichment`.
/// 4. otherwise -> `Submission`.
///
/// Total over every input combination. States the normal flow cannot
/// produce (an analysis without an approved enrichment) fall through to
/// the least-advanced consistent stage rather than erroring; this is a
/// read-only derivation used for display, so availability wins over strict
/// validation.
pub fn resolve_stage(enrichment: Option<&Enrichment>, analysis: Option<&Analysis>) -> Stage {
  if let Some(analysis) = analysis {
    if analysis.status == AnalysisStatus::Sent {
      return Stage::Complete;
    }
    if analysis.status == AnalysisStatus::Unknown {
      tracing::warn!("analysis carries an unrecognized status; treating as in progress");
    }
    if enrichment.map(|e| e.status) == Some(EnrichmentStatus::Approved) {
      return Stage::Analysis;
    }
  }

  match enrichment {
    Some(enrichment) => {
      if enrichment.status == EnrichmentStatus::Unknown {
        tracing::warn!("enrichment carries an unrecognized status; treating as in progress");
      }
      Stage::Enrichment
    }
    None => Stage::Submission,
  }
}
