//! Forge pipeline manifest types
//!
//! The pipeline service writes one manifest per session recording the state
//! of each processing stage; the admin panel and session manager read it for
//! progress display and failure triage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{PipelineStage, StageStatus};

/// State of one pipeline stage for one session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageRecord {
    /// Which stage this record describes
    pub stage: PipelineStage,

    /// Current status; absent reads as `pending`
    #[serde(default)]
    pub status: StageStatus,

    /// When the stage started executing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the stage finished (completed, failed, or skipped)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,

    /// Execution attempt number, starting at 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt: Option<u32>,

    /// Failure description; present when `status` is `failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StageRecord {
    /// A pending record for a stage that has not run yet
    pub fn pending(stage: PipelineStage) -> Self {
        StageRecord {
            stage,
            status: StageStatus::Pending,
            started_at: None,
            finished_at: None,
            attempt: None,
            error: None,
        }
    }
}

/// Per-session pipeline manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineManifest {
    /// Session this manifest belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,

    /// Stage records, in execution order
    #[serde(default)]
    pub stages: Vec<StageRecord>,

    /// When the pipeline run was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last manifest update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PipelineManifest {
    /// A fresh manifest with every stage pending
    pub fn new(session_id: Uuid) -> Self {
        PipelineManifest {
            session_id: Some(session_id),
            stages: PipelineStage::ALL.iter().map(|s| StageRecord::pending(*s)).collect(),
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }
}
