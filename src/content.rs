//! Content resolution: canonical vs. translated
//!
//! Two read paths exist over a session's content:
//!
//! - [`canonical_content`] is always the authoritative `content` value.
//!   For indexing, analytics, classification, summarization, diffing, and
//!   anything else that must never observe a translated variant.
//! - [`resolve_content`] is the viewer/export path. Picks the language
//!   variant to render, with a freshness classification the caller can
//!   surface as a non-blocking indicator.
//!
//! Resolution is pure and synchronous: no I/O, no mutation, and absence is
//! never an error. Staleness is read from each translation entry's own
//! `status`; this module does not recompute it from revisions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

use crate::constants::TranslationStatus;
use crate::schemas::session::{Session, AUTO_LANGUAGE};

/// Terminal fallback when the effective original language cannot be
/// determined at all. Independent of any enumerated language list.
const FALLBACK_LANGUAGE: &str = "en";

/// ISO 639-1 codes rendered right-to-left
///
/// Extending this set is the only change needed to support another RTL
/// language; the resolution algorithm never special-cases codes.
static RTL_LANGUAGES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["ar", "he", "fa", "ur"].into_iter().collect());

/// Text-direction hint for rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextDir {
    Rtl,
    Ltr,
    /// Defer to the renderer's own detection
    Auto,
}

impl std::fmt::Display for TextDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TextDir::Rtl => "rtl",
            TextDir::Ltr => "ltr",
            TextDir::Auto => "auto",
        };
        write!(f, "{}", s)
    }
}

/// What the resolved content is, relative to the canonical source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    /// The original content itself; always fresh
    Canonical,
    /// An up-to-date translation
    Ready,
    /// A translation whose canonical source has since changed; served
    /// anyway so the viewer degrades gracefully instead of losing the page
    Stale,
    /// No usable translation; canonical content served as fallback
    Missing,
}

/// Output of [`resolve_content`]
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedContent<'a> {
    /// The content to render, selected whole-document (never a field-level
    /// merge of canonical and translated values)
    pub content: &'a Value,
    /// Direction hint for the effective requested language
    pub dir: TextDir,
    /// Language of the returned content
    pub language_used: String,
    /// Freshness classification for the caller's indicator
    pub freshness: Freshness,
}

/// Canonical content accessor
///
/// Returns the session's literal `content` value, or `None` when the session
/// is absent or has none. Never looks at `translations`.
pub fn canonical_content(session: Option<&Session>) -> Option<&Value> {
    session.and_then(|s| s.content.as_ref())
}

/// Direction hint for a language code
///
/// `None` and the `"auto"` sentinel defer to the renderer; known RTL codes
/// map to `rtl`; everything else is `ltr`.
pub fn text_direction(language: Option<&str>) -> TextDir {
    match language {
        None => TextDir::Auto,
        Some(AUTO_LANGUAGE) => TextDir::Auto,
        Some(code) if RTL_LANGUAGES.contains(code) => TextDir::Rtl,
        Some(_) => TextDir::Ltr,
    }
}

/// The language considered authoritative for this session
///
/// Explicit `originalLanguage` override wins; otherwise the declared
/// `output_language`, reading through the `"auto"` sentinel to
/// `detected_language`.
fn effective_original_language(session: &Session) -> Option<String> {
    if let Some(lang) = &session.original_language {
        return Some(lang.clone());
    }
    let meta = session.content_metadata.as_ref()?;
    match meta.output_language.as_deref() {
        Some(AUTO_LANGUAGE) => meta.detected_language.clone(),
        Some(lang) => Some(lang.to_string()),
        None => None,
    }
}

/// Resolve which language variant of a session's content to render
///
/// Viewer/export path only; indexing and analysis consumers use
/// [`canonical_content`]. `requested` is the caller's language selector:
/// a code, the `"auto"` sentinel, or `None`.
///
/// Selection, in order:
/// 1. No canonical content → no result.
/// 2. Requesting the original language (or `"auto"`/`None`) → canonical.
/// 3. A `ready` or `stale` translation entry for the requested language →
///    that entry's content, flagged accordingly. Stale entries are served
///    deliberately; the flag lets the caller render a banner.
/// 4. Otherwise (`in_progress`, `failed`, or no entry) → canonical content
///    flagged `missing`.
///
/// Never panics; absence at any level is a defined branch.
pub fn resolve_content<'a>(
    session: Option<&'a Session>,
    requested: Option<&str>,
) -> Option<ResolvedContent<'a>> {
    let session = session?;
    let content = session.content.as_ref()?;

    let original = effective_original_language(session);

    // The language the caller effectively asked for; drives the direction
    // hint in every branch.
    let effective_requested = match requested {
        Some(lang) if lang != AUTO_LANGUAGE => Some(lang.to_string()),
        _ => original.clone(),
    };
    let dir = text_direction(effective_requested.as_deref());

    // Case A: the original is what was asked for.
    let requested_is_original = match requested {
        None | Some(AUTO_LANGUAGE) => true,
        Some(lang) => original.as_deref() == Some(lang),
    };
    if requested_is_original {
        let language_used = original
            .clone()
            .or_else(|| effective_requested.clone())
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());
        return Some(ResolvedContent {
            content,
            dir,
            language_used,
            freshness: Freshness::Canonical,
        });
    }

    // After case A the selector is a concrete code distinct from the original.
    let requested_lang = requested?;

    // Case B: a translation entry exists for the requested language.
    if let Some(entry) = session.translations.get(requested_lang) {
        match entry.status {
            TranslationStatus::Ready | TranslationStatus::Stale => {
                if let Some(translated) = entry.translated_content.as_ref() {
                    let freshness = if entry.status == TranslationStatus::Ready {
                        Freshness::Ready
                    } else {
                        Freshness::Stale
                    };
                    return Some(ResolvedContent {
                        content: translated,
                        dir,
                        language_used: requested_lang.to_string(),
                        freshness,
                    });
                }
                // Entry with no content behaves like a missing translation.
            }
            TranslationStatus::InProgress | TranslationStatus::Failed => {
                // Both fall back to canonical; callers wanting to distinguish
                // "translating" from "failed" read the entry's status directly.
            }
        }
    }

    // Case C: no usable translation for the requested language.
    debug!(language = requested_lang, "no usable translation, serving canonical content");
    Some(ResolvedContent {
        content,
        dir,
        language_used: original.unwrap_or_else(|| FALLBACK_LANGUAGE.to_string()),
        freshness: Freshness::Missing,
    })
}
