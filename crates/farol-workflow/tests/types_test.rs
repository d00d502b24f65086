//! Wire-format behavior of the entity types.

use std::str::FromStr;

use farol_workflow::{Analysis, AnalysisStatus, Enrichment, EnrichmentStatus};
use serde_json::json;

#[test]
fn test_enrichment_status_wire_spellings() {
  let status: EnrichmentStatus = serde_json::from_value(json!("finished")).unwrap();
  assert_eq!(status, EnrichmentStatus::Finished);

  // Legacy spelling used by older API responses.
  let status: EnrichmentStatus = serde_json::from_value(json!("completed")).unwrap();
  assert_eq!(status, EnrichmentStatus::Finished);
}

#[test]
fn test_unrecognized_statuses_deserialize_as_unknown() {
  let status: EnrichmentStatus = serde_json::from_value(json!("archived")).unwrap();
  assert_eq!(status, EnrichmentStatus::Unknown);

  let status: AnalysisStatus = serde_json::from_value(json!("archived")).unwrap();
  assert_eq!(status, AnalysisStatus::Unknown);
}

#[test]
fn test_enrichment_record_from_api_shape() {
  let enrichment: Enrichment = serde_json::from_value(json!({
    "status": "pending",
    "progress": 37,
    "data": { "market": { "size": "large" } },
    "createdAt": "2026-03-01T12:00:00Z",
    "updatedAt": "2026-03-01T12:05:00Z"
  }))
  .unwrap();

  assert_eq!(enrichment.status, EnrichmentStatus::Pending);
  assert_eq!(enrichment.progress, Some(37));
  assert_eq!(enrichment.data["market"]["size"], "large");
}

#[test]
fn test_analysis_record_from_api_shape() {
  let analysis: Analysis = serde_json::from_value(json!({
    "status": "completed",
    "analysis": {
      "swot": { "strengths": ["brand"] },
      "porter": { "rivalry": "high" }
    },
    "accessCode": "X9F2",
    "isPublic": false,
    "isVisibleToUser": true,
    "createdAt": "2026-03-02T09:00:00Z",
    "updatedAt": "2026-03-02T09:30:00Z"
  }))
  .unwrap();

  assert_eq!(analysis.status, AnalysisStatus::Completed);
  assert_eq!(analysis.analysis.len(), 2);
  assert_eq!(analysis.access_code.as_deref(), Some("X9F2"));
  assert!(analysis.is_visible_to_user);
}

#[test]
fn test_analysis_record_defaults_optional_fields() {
  let analysis: Analysis = serde_json::from_value(json!({
    "status": "pending",
    "createdAt": "2026-03-02T09:00:00Z",
    "updatedAt": "2026-03-02T09:00:00Z"
  }))
  .unwrap();

  assert!(analysis.analysis.is_empty());
  assert_eq!(analysis.access_code, None);
  assert!(!analysis.is_public);
  assert!(!analysis.is_visible_to_user);
}

#[test]
fn test_status_from_str_accepts_known_values() {
  assert_eq!(
    EnrichmentStatus::from_str("completed").unwrap(),
    EnrichmentStatus::Finished
  );
  assert_eq!(
    AnalysisStatus::from_str("sent").unwrap(),
    AnalysisStatus::Sent
  );
}

#[test]
fn test_status_from_str_rejects_unknown_values() {
  let err = EnrichmentStatus::from_str("archived").unwrap_err();
  assert!(err.to_string().contains("archived"));
  assert!(err.to_string().contains("enrichment"));

  let err = AnalysisStatus::from_str("draft").unwrap_err();
  assert!(err.to_string().contains("draft"));
}
