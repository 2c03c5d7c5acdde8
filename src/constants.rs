//! Shared enumerations parameterizing the Forge schemas
//!
//! Wire representations are snake_case strings; stored documents and API
//! payloads across all services use these exact values.

use serde::{Deserialize, Serialize};

/// Forge pipeline stages, in execution order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Raw capture ingested and normalized
    Ingest,
    /// Speech transcribed to text
    Transcribe,
    /// Recording split into steps/segments
    Segment,
    /// Guide/narration content synthesized
    Synthesize,
    /// Video artifact rendered
    Render,
    /// Artifacts published to storage
    Publish,
}

impl PipelineStage {
    /// All stages in execution order
    pub const ALL: [PipelineStage; 6] = [
        PipelineStage::Ingest,
        PipelineStage::Transcribe,
        PipelineStage::Segment,
        PipelineStage::Synthesize,
        PipelineStage::Render,
        PipelineStage::Publish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Ingest => "ingest",
            PipelineStage::Transcribe => "transcribe",
            PipelineStage::Segment => "segment",
            PipelineStage::Synthesize => "synthesize",
            PipelineStage::Render => "render",
            PipelineStage::Publish => "publish",
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a single pipeline stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// Not yet started
    #[default]
    Pending,
    /// Currently executing
    Running,
    /// Finished successfully
    Completed,
    /// Finished with an error
    Failed,
    /// Intentionally not executed for this session
    Skipped,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Pending => "pending",
            StageStatus::Running => "running",
            StageStatus::Completed => "completed",
            StageStatus::Failed => "failed",
            StageStatus::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Session lifecycle states
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Capture in progress
    Recording,
    /// Pipeline processing the capture
    Processing,
    /// Artifacts available
    Ready,
    /// Pipeline failed; session has no usable artifacts
    Failed,
    /// Hidden from active views, retained for history
    Archived,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionStatus::Recording => "recording",
            SessionStatus::Processing => "processing",
            SessionStatus::Ready => "ready",
            SessionStatus::Failed => "failed",
            SessionStatus::Archived => "archived",
        };
        write!(f, "{}", s)
    }
}

/// Artifact families produced by the pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    WorkflowGuide,
    KnowledgeBase,
    Video,
}

/// Lifecycle state of a cached translation entry
///
/// An entry is usable by viewers only in `Ready` or `Stale`; the other two
/// states fall back to canonical content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TranslationStatus {
    /// Up to date with the canonical content it was generated from
    Ready,
    /// Canonical content has advanced past this entry's source revision
    Stale,
    /// A translation job is generating or regenerating this entry
    #[default]
    InProgress,
    /// The last translation job for this entry failed
    Failed,
}

impl TranslationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationStatus::Ready => "ready",
            TranslationStatus::Stale => "stale",
            TranslationStatus::InProgress => "in_progress",
            TranslationStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a session's capture was produced
///
/// First dimension of the session-start usage counters. `Extension` is the
/// primary member used when callers omit the dimension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMethod {
    /// Browser extension recorder
    Extension,
    /// Desktop bridge recorder
    Desktop,
    /// Started programmatically via MCP tools
    Mcp,
    /// Uploaded pre-recorded media
    Upload,
}

impl CaptureMethod {
    pub const ALL: [CaptureMethod; 4] = [
        CaptureMethod::Extension,
        CaptureMethod::Desktop,
        CaptureMethod::Mcp,
        CaptureMethod::Upload,
    ];

    /// Baseline member used when the dimension is not supplied
    pub fn primary() -> CaptureMethod {
        CaptureMethod::Extension
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureMethod::Extension => "extension",
            CaptureMethod::Desktop => "desktop",
            CaptureMethod::Mcp => "mcp",
            CaptureMethod::Upload => "upload",
        }
    }

    /// Parse a wire value; `None` for unrecognized strings
    pub fn from_wire(s: &str) -> Option<CaptureMethod> {
        CaptureMethod::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

/// What the session's output is for
///
/// Second dimension of the session-start usage counters. `WorkflowGuide` is
/// the primary member used when callers omit the dimension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputPurpose {
    WorkflowGuide,
    KnowledgeBase,
    Video,
}

impl OutputPurpose {
    pub const ALL: [OutputPurpose; 3] = [
        OutputPurpose::WorkflowGuide,
        OutputPurpose::KnowledgeBase,
        OutputPurpose::Video,
    ];

    /// Baseline member used when the dimension is not supplied
    pub fn primary() -> OutputPurpose {
        OutputPurpose::WorkflowGuide
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputPurpose::WorkflowGuide => "workflow_guide",
            OutputPurpose::KnowledgeBase => "knowledge_base",
            OutputPurpose::Video => "video",
        }
    }

    /// Parse a wire value; `None` for unrecognized strings
    pub fn from_wire(s: &str) -> Option<OutputPurpose> {
        OutputPurpose::ALL.into_iter().find(|p| p.as_str() == s)
    }
}
