//! Stage resolution over the full status matrix.

use farol_workflow::{Analysis, AnalysisStatus, Enrichment, EnrichmentStatus, Stage, resolve_stage};

fn enrichment(status: EnrichmentStatus) -> Enrichment {
  Enrichment::new(status)
}

fn analysis(status: AnalysisStatus) -> Analysis {
  Analysis::new(status)
}

#[test]
fn test_no_records_is_submission() {
  assert_eq!(resolve_stage(None, None), Stage::Submission);
}

#[test]
fn test_any_enrichment_status_is_enrichment_stage() {
  for status in EnrichmentStatus::ALL {
    let e = enrichment(status);
    assert_eq!(resolve_stage(Some(&e), None), Stage::Enrichment);
  }
}

#[test]
fn test_approved_enrichment_with_analysis_is_analysis_stage() {
  let e = enrichment(EnrichmentStatus::Approved);
  for status in [
    AnalysisStatus::Pending,
    AnalysisStatus::Completed,
    AnalysisStatus::Approved,
    AnalysisStatus::Failed,
    AnalysisStatus::Unknown,
  ] {
    let a = analysis(status);
    assert_eq!(resolve_stage(Some(&e), Some(&a)), Stage::Analysis);
  }
}

#[test]
fn test_sent_analysis_is_complete_regardless_of_enrichment() {
  let a = analysis(AnalysisStatus::Sent);
  assert_eq!(resolve_stage(None, Some(&a)), Stage::Complete);
  for status in EnrichmentStatus::ALL {
    let e = enrichment(status);
    assert_eq!(resolve_stage(Some(&e), Some(&a)), Stage::Complete);
  }
}

#[test]
fn test_approved_enrichment_alone_is_still_enrichment_stage() {
  let e = enrichment(EnrichmentStatus::Approved);
  assert_eq!(resolve_stage(Some(&e), None), Stage::Enrichment);
}

#[test]
fn test_analysis_without_approved_enrichment_falls_back() {
  // Not reachable through normal flow; the resolver must not advance the
  // stage past what the enrichment supports.
  let e = enrichment(EnrichmentStatus::Pending);
  let a = analysis(AnalysisStatus::Completed);
  assert_eq!(resolve_stage(Some(&e), Some(&a)), Stage::Enrichment);
}

#[test]
fn test_analysis_without_any_enrichment_falls_back_to_submission() {
  let a = analysis(AnalysisStatus::Pending);
  assert_eq!(resolve_stage(None, Some(&a)), Stage::Submission);
}

#[test]
fn test_totality_over_full_matrix() {
  let enrichments: Vec<Option<Enrichment>> = std::iter::once(None)
    .chain(EnrichmentStatus::ALL.into_iter().map(|s| Some(enrichment(s))))
    .collect();
  let analyses: Vec<Option<Analysis>> = std::iter::once(None)
    .chain(AnalysisStatus::ALL.into_iter().map(|s| Some(analysis(s))))
    .collect();

  for e in &enrichments {
    for a in &analyses {
      let stage = resolve_stage(e.as_ref(), a.as_ref());
      assert!(Stage::ALL.contains(&stage));
    }
  }
}

#[test]
fn test_stage_ordering_matches_pipeline() {
  assert!(Stage::Submission < Stage::Enrichment);
  assert!(Stage::Enrichment < Stage::Analysis);
  assert!(Stage::Analysis < Stage::Complete);
}

#[test]
fn test_stage_steps_are_sequential() {
  for (i, stage) in Stage::ALL.iter().enumerate() {
    assert_eq!(stage.step(), i as u8 + 1);
  }
}
