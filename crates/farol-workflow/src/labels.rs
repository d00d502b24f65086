//! Presentation lookups keyed by the canonical enums.
//!
//! Pure string tables for the UI layer. No stage logic lives here; anything
//! that needs to know *where* a submission is goes through the resolvers.

use crate::action::ActionKind;
use crate::stage::Stage;
use crate::types::{AnalysisStatus, EnrichmentStatus};

/// Title and short description for a pipeline stage.
pub fn stage_copy(stage: Stage) -> (&'static str, &'static str) {
  match stage {
    Stage::Submission => ("Submissão", "Perfil da empresa e desafio recebidos"),
    Stage::Enrichment => ("Enriquecimento", "Coleta automática de dados de mercado"),
    Stage::Analysis => ("Análise", "Geração e revisão da análise estratégica"),
    Stage::Complete => ("Concluído", "Relatório enviado ao cliente"),
  }
}

/// Badge label for an enrichment status.
pub fn enrichment_status_label(status: EnrichmentStatus) -> &'static str {
  match status {
    EnrichmentStatus::Pending => "Em andamento",
    EnrichmentStatus::Finished => "Aguardando aprovação",
    EnrichmentStatus::Approved => "Aprovado",
    EnrichmentStatus::Failed => "Falhou",
    EnrichmentStatus::Unknown => "Desconhecido",
  }
}

/// Badge label for an analysis status.
pub fn analysis_status_label(status: AnalysisStatus) -> &'static str {
  match status {
    AnalysisStatus::Pending => "Em processamento",
    AnalysisStatus::Completed => "Aguardando aprovação",
    AnalysisStatus::Approved => "Aprovada",
    AnalysisStatus::Sent => "Enviada",
    AnalysisStatus::Failed => "Falhou",
    AnalysisStatus::Unknown => "Desconhecido",
  }
}

/// Button label and description for an admin action.
pub fn action_copy(kind: ActionKind) -> (&'static str, &'static str) {
  match kind {
    ActionKind::StartEnrichment => (
      "Iniciar Enriquecimento",
      "Dispara a coleta automática de dados da empresa.",
    ),
    ActionKind::ApproveEnrichment => (
      "Aprovar Enriquecimento",
      "Libera os dados coletados para a geração da análise.",
    ),
    ActionKind::RetryEnrichment => (
      "Reprocessar Enriquecimento",
      "Executa a coleta de dados novamente após a falha.",
    ),
    ActionKind::GenerateAnalysis => (
      "Gerar Análise",
      "Inicia a análise estratégica multi-framework.",
    ),
    ActionKind::ApproveAnalysis => (
      "Aprovar Análise",
      "Valida a análise para envio ao cliente.",
    ),
    ActionKind::RetryAnalysis => (
      "Reprocessar Análise",
      "Gera a análise novamente após a falha.",
    ),
    ActionKind::SendToClient => (
      "Enviar ao Cliente",
      "Disponibiliza o relatório e o dashboard para o cliente.",
    ),
  }
}
