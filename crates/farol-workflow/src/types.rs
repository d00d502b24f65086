use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StatusParseError;

/// Status of an enrichment run.
///
/// Advances monotonically Pending -> Finished -> Approved under normal
/// operation; `Failed` is a side exit the admin can retry out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentStatus {
  /// Collectors are still running.
  Pending,
  /// Collection done, awaiting admin approval. The API historically spells
  /// this both "finished" and "completed"; both deserialize here.
  #[serde(alias = "completed")]
  Finished,
  /// Admin approved the collected data; analysis may be generated.
  Approved,
  /// Collection aborted; eligible for retry.
  Failed,
  /// Catch-all for statuses this build does not know about. Resolvers treat
  /// it as the least-advanced state of its stage.
  #[serde(other)]
  Unknown,
}

impl EnrichmentStatus {
  /// Every status, for exhaustive matrix checks and admin filters.
  pub const ALL: [EnrichmentStatus; 5] = [
    EnrichmentStatus::Pending,
    EnrichmentStatus::Finished,
    EnrichmentStatus::Approved,
    EnrichmentStatus::Failed,
    EnrichmentStatus::Unknown,
  ];
}

impl FromStr for EnrichmentStatus {
  type Err = StatusParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(EnrichmentStatus::Pending),
      "finished" | "completed" => Ok(EnrichmentStatus::Finished),
      "approved" => Ok(EnrichmentStatus::Approved),
      "failed" => Ok(EnrichmentStatus::Failed),
      other => Err(StatusParseError {
        entity: "enrichment",
        value: other.to_string(),
      }),
    }
  }
}

/// Status of a strategic analysis.
///
/// Advances monotonically Pending -> Completed -> Approved -> Sent; `Sent`
/// is the sole terminal state of the whole pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
  /// Analysis generation is in progress.
  Pending,
  /// Report generated, awaiting admin approval.
  Completed,
  /// Admin approved the report; ready to send.
  Approved,
  /// Report delivered to the client. Terminal.
  Sent,
  /// Generation aborted; eligible for retry.
  Failed,
  /// Catch-all for statuses this build does not know about.
  #[serde(other)]
  Unknown,
}

impl AnalysisStatus {
  /// Every status, for exhaustive matrix checks and admin filters.
  pub const ALL: [AnalysisStatus; 6] = [
    AnalysisStatus::Pending,
    AnalysisStatus::Completed,
    AnalysisStatus::Approved,
    AnalysisStatus::Sent,
    AnalysisStatus::Failed,
    AnalysisStatus::Unknown,
  ];
}

impl FromStr for AnalysisStatus {
  type Err = StatusParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(AnalysisStatus::Pending),
      "completed" => Ok(AnalysisStatus::Completed),
      "approved" => Ok(AnalysisStatus::Approved),
      "sent" => Ok(AnalysisStatus::Sent),
      "failed" => Ok(AnalysisStatus::Failed),
      other => Err(StatusParseError {
        entity: "analysis",
        value: other.to_string(),
      }),
    }
  }
}

/// Intake record of a company and its strategic challenge.
///
/// Created once on intake and never mutated by this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
  pub id: String,
  pub company_name: String,
  pub created_at: DateTime<Utc>,
}

/// One-per-submission record of automated data collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrichment {
  pub status: EnrichmentStatus,

  /// Raw collector progress, 0-100. Display only; the pipeline percentage
  /// comes from `estimate_progress`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub progress: Option<u8>,

  /// Structured sections produced by the collectors.
  #[serde(default)]
  pub data: serde_json::Value,

  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Enrichment {
  /// New enrichment snapshot with empty data and current timestamps.
  pub fn new(status: EnrichmentStatus) -> Self {
    let now = Utc::now();
    Self {
      status,
      progress: None,
      data: serde_json::Value::Null,
      created_at: now,
      updated_at: now,
    }
  }
}

/// One-per-enrichment record of the strategic report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
  pub status: AnalysisStatus,

  /// Framework key (e.g. "swot", "porter") -> framework result.
  #[serde(default)]
  pub analysis: HashMap<String, serde_json::Value>,

  /// Share code for the public report view.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub access_code: Option<String>,

  #[serde(default)]
  pub is_public: bool,

  #[serde(default)]
  pub is_visible_to_user: bool,

  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Analysis {
  /// New analysis snapshot with no framework results and current timestamps.
  pub fn new(status: AnalysisStatus) -> Self {
    let now = Utc::now();
    Self {
      status,
      analysis: HashMap::new(),
      access_code: None,
      is_public: false,
      is_visible_to_user: false,
      created_at: now,
      updated_at: now,
    }
  }
}
