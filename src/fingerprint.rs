//! Content fingerprinting
//!
//! Every collaborator that writes `contentFingerprint` or
//! `sourceFingerprint` must compute it identically, so the fingerprint
//! lives here: SHA-256 over the canonical JSON encoding of the content
//! value. With serde_json's default map type, object keys serialize in
//! sorted order, so the encoding is independent of insertion order.

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::schemas::session::{Session, TranslationEntry};

/// Fingerprint of a content value: 64 lowercase hex characters
pub fn content_fingerprint(content: &Value) -> Result<String> {
    let encoded = serde_json::to_vec(content)?;
    let mut hasher = Sha256::new();
    hasher.update(&encoded);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Whether a translation entry was generated from the session's current
/// canonical content
///
/// For cache writers deciding whether to mark an entry `stale` or skip a
/// retranslation. Revision comparison wins when both sides carry one;
/// fingerprints are the fallback for documents predating revisions. The
/// viewer-side resolver does not use this; it trusts the entry's `status`.
pub fn translation_is_current(session: &Session, entry: &TranslationEntry) -> bool {
    if let (Some(current), Some(source)) = (session.content_revision, entry.source_revision) {
        return current == source;
    }
    if let (Some(current), Some(source)) =
        (&session.content_fingerprint, &entry.source_fingerprint)
    {
        return current == source;
    }
    false
}
