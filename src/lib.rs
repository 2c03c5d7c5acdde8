//! # Forge Common Library
//!
//! Shared data contracts for all Forge services including:
//! - Schema types for stored documents and wire payloads
//! - Runtime validation helpers
//! - Content resolution (canonical vs. translated content)
//! - Usage counter mapping and document path builders
//! - Content fingerprinting

pub mod constants;
pub mod content;
pub mod error;
pub mod fingerprint;
pub mod schemas;
pub mod usage;
pub mod validate;

pub use content::{canonical_content, resolve_content, text_direction, Freshness, ResolvedContent, TextDir};
pub use error::{Error, Result};
