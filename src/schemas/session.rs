//! Session document types
//!
//! The session is the authoritative unit of the product: its `content` field
//! holds the canonical artifact payload and `translations` holds cached
//! per-language renderings derived from it.
//!
//! Stored documents predate the snake_case convention for a few fields
//! (`originalLanguage`, `contentRevision`, `contentFingerprint`,
//! `translatedContent`, ...); the serde renames below preserve the wire
//! format exactly. Every field is tolerant of absence on read.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::constants::{ArtifactType, CaptureMethod, SessionStatus, TranslationStatus};

/// Sentinel value for "language not explicitly chosen"
///
/// Accepted both as a metadata `output_language` (meaning: read the effective
/// original language from `detected_language`) and as a viewer's requested
/// language (meaning: serve the original).
pub const AUTO_LANGUAGE: &str = "auto";

/// Language metadata attached to canonical content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentMetadata {
    /// Declared authored language; may be the `"auto"` sentinel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_language: Option<String>,
    /// Language detected from the capture itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,
}

/// A cached translation of canonical content into one target language
///
/// Derived, never authoritative. Written only by the translation subsystem;
/// viewers and exporters read it through the content resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TranslationEntry {
    /// Translated rendering; structurally mirrors canonical `content`
    #[serde(
        rename = "translatedContent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub translated_content: Option<Value>,

    /// When this entry was generated
    #[serde(
        rename = "translatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub translated_at: Option<DateTime<Utc>>,

    /// Canonical `contentRevision` this entry was generated from
    #[serde(
        rename = "sourceRevision",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_revision: Option<i64>,

    /// Canonical `contentFingerprint` this entry was generated from
    #[serde(
        rename = "sourceFingerprint",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_fingerprint: Option<String>,

    /// Lifecycle state; absent status reads as `in_progress` (not yet usable)
    #[serde(default)]
    pub status: TranslationStatus,

    /// Translation engine/model that produced this entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Failure description; present when `status` is `failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationEntry {
    /// Build a `ready` entry for a freshly completed translation job
    pub fn ready(content: Value, source_revision: i64, source_fingerprint: impl Into<String>) -> Self {
        TranslationEntry {
            translated_content: Some(content),
            translated_at: Some(Utc::now()),
            source_revision: Some(source_revision),
            source_fingerprint: Some(source_fingerprint.into()),
            status: TranslationStatus::Ready,
            model: None,
            error: None,
        }
    }

    /// Build a `failed` entry recording why the last job did not complete
    pub fn failed(error: impl Into<String>) -> Self {
        TranslationEntry {
            status: TranslationStatus::Failed,
            error: Some(error.into()),
            ..TranslationEntry::default()
        }
    }
}

/// A session document as stored and exchanged between services
///
/// All fields are optional on read; partially written documents and older
/// schema generations must deserialize without error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Owning user identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Project this session belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,

    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Lifecycle state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,

    /// Artifact family this session produces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<ArtifactType>,

    /// How the capture was produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,

    /// Canonical content payload, the single source of truth.
    /// Shape depends on `artifact_type`; opaque at this level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    /// Language metadata for the canonical content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_metadata: Option<ContentMetadata>,

    /// Explicit override of the effective original language; takes
    /// precedence over `content_metadata` when present
    #[serde(
        rename = "originalLanguage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_language: Option<String>,

    /// Monotonic counter incremented on every canonical content edit
    #[serde(
        rename = "contentRevision",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_revision: Option<i64>,

    /// Hash of the canonical content (see [`crate::fingerprint`])
    #[serde(
        rename = "contentFingerprint",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_fingerprint: Option<String>,

    /// Cached translations, at most one entry per language code
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub translations: HashMap<String, TranslationEntry>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Translation entry for a language code, if one exists
    pub fn translation(&self, language: &str) -> Option<&TranslationEntry> {
        self.translations.get(language)
    }
}
