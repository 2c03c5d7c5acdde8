//! Runtime validation helpers
//!
//! Thin wrappers that run a schema type over raw JSON and produce a uniform
//! success/failure result, plus the small derived computations services
//! share (pipeline progress, failed-stage extraction).

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::constants::{PipelineStage, StageStatus};
use crate::error::{Error, Result};
use crate::schemas::pipeline::PipelineManifest;

/// Validate a raw JSON value against a schema type
///
/// `kind` names the document family for logs and error messages. Malformed
/// input yields [`Error::Validation`] describing what failed; this function
/// never panics.
pub fn validate_json<T: DeserializeOwned>(kind: &'static str, value: Value) -> Result<T> {
    match serde_json::from_value(value) {
        Ok(v) => Ok(v),
        Err(e) => {
            warn!(kind, "document failed validation: {}", e);
            Err(Error::Validation {
                kind,
                detail: e.to_string(),
            })
        }
    }
}

/// Integer percentage of pipeline stages that are done
///
/// `completed` and `skipped` both count as done; an empty manifest is 0%.
pub fn pipeline_progress_percent(manifest: &PipelineManifest) -> u8 {
    if manifest.stages.is_empty() {
        return 0;
    }
    let done = manifest
        .stages
        .iter()
        .filter(|r| matches!(r.status, StageStatus::Completed | StageStatus::Skipped))
        .count();
    ((done * 100) / manifest.stages.len()) as u8
}

/// Stages whose status is `failed`, in manifest order
pub fn failed_stages(manifest: &PipelineManifest) -> Vec<PipelineStage> {
    manifest
        .stages
        .iter()
        .filter(|r| r.status == StageStatus::Failed)
        .map(|r| r.stage)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::pipeline::StageRecord;
    use crate::schemas::session::Session;
    use serde_json::json;

    fn manifest(statuses: &[(PipelineStage, StageStatus)]) -> PipelineManifest {
        PipelineManifest {
            stages: statuses
                .iter()
                .map(|(stage, status)| StageRecord {
                    status: *status,
                    ..StageRecord::pending(*stage)
                })
                .collect(),
            ..PipelineManifest::default()
        }
    }

    #[test]
    fn test_validate_json_success() {
        let session: Session = validate_json(
            "session",
            json!({"content": {"title": "Guide"}, "contentRevision": 2}),
        )
        .unwrap();
        assert_eq!(session.content_revision, Some(2));
    }

    #[test]
    fn test_validate_json_failure_is_structured() {
        let err = validate_json::<Session>("session", json!({"contentRevision": "not a number"}))
            .unwrap_err();
        match err {
            Error::Validation { kind, detail } => {
                assert_eq!(kind, "session");
                assert!(!detail.is_empty());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_progress_empty_manifest_is_zero() {
        assert_eq!(pipeline_progress_percent(&PipelineManifest::default()), 0);
    }

    #[test]
    fn test_progress_counts_completed_and_skipped() {
        let m = manifest(&[
            (PipelineStage::Ingest, StageStatus::Completed),
            (PipelineStage::Transcribe, StageStatus::Skipped),
            (PipelineStage::Segment, StageStatus::Running),
            (PipelineStage::Synthesize, StageStatus::Pending),
        ]);
        assert_eq!(pipeline_progress_percent(&m), 50);
    }

    #[test]
    fn test_progress_all_done_is_hundred() {
        let m = manifest(&[
            (PipelineStage::Ingest, StageStatus::Completed),
            (PipelineStage::Render, StageStatus::Completed),
        ]);
        assert_eq!(pipeline_progress_percent(&m), 100);
    }

    #[test]
    fn test_failed_stages_extraction() {
        let m = manifest(&[
            (PipelineStage::Ingest, StageStatus::Completed),
            (PipelineStage::Transcribe, StageStatus::Failed),
            (PipelineStage::Render, StageStatus::Failed),
        ]);
        assert_eq!(
            failed_stages(&m),
            vec![PipelineStage::Transcribe, PipelineStage::Render]
        );
    }

    #[test]
    fn test_failed_stages_none() {
        let m = manifest(&[(PipelineStage::Ingest, StageStatus::Completed)]);
        assert!(failed_stages(&m).is_empty());
    }
}
