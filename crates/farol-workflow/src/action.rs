//! Next admin action for a submission.
//!
//! Every pipeline state maps to exactly one call-to-action descriptor, and
//! at most one of them is ever enabled. The admin UI renders the descriptor
//! as-is; it never derives stage logic on its own.

use serde::{Deserialize, Serialize};

use crate::labels;
use crate::stage::{Stage, resolve_stage};
use crate::types::{Analysis, AnalysisStatus, Enrichment, EnrichmentStatus};

/// Admin operations the pipeline can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
  StartEnrichment,
  ApproveEnrichment,
  RetryEnrichment,
  GenerateAnalysis,
  ApproveAnalysis,
  RetryAnalysis,
  SendToClient,
}

/// Descriptor for the single admin call-to-action button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
  pub label: String,
  pub description: String,

  /// The operation to dispatch when the button is pressed. `None` for
  /// waiting and terminal descriptors.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<ActionKind>,

  pub enabled: bool,

  /// Why the button is disabled, when it is.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub disabled_reason: Option<String>,
}

impl NextAction {
  fn actionable(kind: ActionKind) -> Self {
    let (label, description) = labels::action_copy(kind);
    Self {
      label: label.to_string(),
      description: description.to_string(),
      kind: Some(kind),
      enabled: true,
      disabled_reason: None,
    }
  }

  fn waiting(label: &str, description: &str, reason: &str) -> Self {
    Self {
      label: label.to_string(),
      description: description.to_string(),
      kind: None,
      enabled: false,
      disabled_reason: Some(reason.to_string()),
    }
  }

  fn done() -> Self {
    let (label, description) = labels::stage_copy(Stage::Complete);
    Self {
      label: label.to_string(),
      description: description.to_string(),
      kind: None,
      enabled: false,
      disabled_reason: None,
    }
  }
}

/// Compute the single legal next admin action for the pipeline state.
///
/// Delegates stage resolution to [`resolve_stage`], then picks the one
/// actionable item within that stage. Failed sub-resources get an enabled
/// retry action; everything still in flight gets a disabled waiting
/// descriptor with a reason.
pub fn resolve_next_action(
  enrichment: Option<&Enrichment>,
  analysis: Option<&Analysis>,
) -> NextAction {
  match resolve_stage(enrichment, analysis) {
    Stage::Complete => NextAction::done(),

    Stage::Analysis => match analysis.map(|a| a.status) {
      Some(AnalysisStatus::Approved) => NextAction::actionable(ActionKind::SendToClient),
      Some(AnalysisStatus::Completed) => NextAction::actionable(ActionKind::ApproveAnalysis),
      Some(AnalysisStatus::Failed) => NextAction::actionable(ActionKind::RetryAnalysis),
      // Pending, Unknown. Sent and None are unreachable at this stage.
      _ => NextAction::waiting(
        "Análise em Processamento",
        "A análise estratégica está sendo gerada.",
        "Aguardando conclusão da análise",
      ),
    },

    Stage::Enrichment => match enrichment.map(|e| e.status) {
      Some(EnrichmentStatus::Approved) => NextAction::actionable(ActionKind::GenerateAnalysis),
      Some(EnrichmentStatus::Finished) => NextAction::actionable(ActionKind::ApproveEnrichment),
      Some(EnrichmentStatus::Failed) => NextAction::actionable(ActionKind::RetryEnrichment),
      // Pending, Unknown. None is unreachable at this stage.
      _ => NextAction::waiting(
        "Enriquecimento em Andamento",
        "Os dados da empresa estão sendo coletados.",
        "Aguardando coleta de dados",
      ),
    },

    Stage::Submission => NextAction::actionable(ActionKind::StartEnrichment),
  }
}
