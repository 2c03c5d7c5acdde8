//! Project and context object types
//!
//! Projects group sessions; context items are extracted artifacts the MCP
//! tools search over. Relationship and match types carried legacy field
//! names (`from`/`to`) in older documents; those are accepted on read via
//! serde aliases and always written back under the current names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::ArtifactType;

/// A project grouping related sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,

    /// Owning user identifier
    pub user_id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An extracted knowledge item attached to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextItem {
    pub id: Uuid,

    /// Project this item belongs to
    pub project_id: Uuid,

    /// Session the item was extracted from, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,

    /// Artifact family the item came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<ArtifactType>,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A directed relationship between two context items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConceptRelationship {
    /// Source item (legacy documents used `from`)
    #[serde(alias = "from")]
    pub from_item_id: Uuid,

    /// Target item (legacy documents used `to`)
    #[serde(alias = "to")]
    pub to_item_id: Uuid,

    /// Relationship kind, e.g. `depends_on`, `refines`
    pub relation: String,

    /// Relationship strength in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// One search hit from the MCP knowledge-lookup tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeMatch {
    /// Matched context item (legacy documents used `id`)
    #[serde(alias = "id")]
    pub item_id: Uuid,

    /// Relevance score, higher is better
    pub score: f64,

    /// Snippet of the matched content for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}
