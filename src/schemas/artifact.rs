//! Video-artifact content shapes
//!
//! These are the concrete payloads behind a session's opaque `content`
//! field: a step-by-step workflow guide or a knowledge base, both derived
//! from the same capture by the pipeline. Canonical content and every
//! translation entry share these shapes.

use serde::{Deserialize, Serialize};

/// One step of a workflow guide
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuideStep {
    /// 1-based step number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Screenshot captured at this step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_url: Option<String>,

    /// Offset into the source recording, milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
}

/// Step-by-step workflow guide artifact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowGuide {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default)]
    pub steps: Vec<GuideStep>,
}

/// One entry of a knowledge base
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeEntry {
    pub heading: String,

    pub body: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Knowledge base artifact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeBase {
    pub title: String,

    #[serde(default)]
    pub entries: Vec<KnowledgeEntry>,
}

/// Typed view over a session's `content` payload
///
/// Stored documents keep `content` opaque; services that need the concrete
/// shape validate into this enum (see [`crate::validate::validate_json`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArtifactContent {
    WorkflowGuide(WorkflowGuide),
    KnowledgeBase(KnowledgeBase),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_guide_round_trip() {
        let guide: ArtifactContent = serde_json::from_value(json!({
            "kind": "workflow_guide",
            "title": "Deploying the service",
            "steps": [
                {"index": 1, "title": "Open the console"},
                {"index": 2, "title": "Select the project", "timestamp_ms": 4200},
            ],
        }))
        .unwrap();

        match &guide {
            ArtifactContent::WorkflowGuide(g) => {
                assert_eq!(g.steps.len(), 2);
                assert_eq!(g.steps[1].timestamp_ms, Some(4200));
            }
            other => panic!("unexpected artifact: {:?}", other),
        }
    }

    #[test]
    fn test_knowledge_base_empty_entries_default() {
        let kb: KnowledgeBase =
            serde_json::from_value(json!({"title": "Answers"})).unwrap();
        assert!(kb.entries.is_empty());
    }

    #[test]
    fn test_artifact_tag_is_snake_case() {
        let kb = ArtifactContent::KnowledgeBase(KnowledgeBase {
            title: "Answers".to_string(),
            entries: vec![],
        });
        let out = serde_json::to_value(&kb).unwrap();
        assert_eq!(out["kind"], "knowledge_base");
    }
}
