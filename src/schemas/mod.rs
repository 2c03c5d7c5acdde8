//! Schema types for Forge stored documents and wire payloads
//!
//! Each submodule covers one document family. These serde-derived types are
//! the single source of truth for the shapes exchanged between the session
//! manager, bridge, forge pipeline, admin panel, and MCP tools.

pub mod artifact;
pub mod device;
pub mod pairing;
pub mod pipeline;
pub mod project;
pub mod session;

pub use artifact::{ArtifactContent, GuideStep, KnowledgeBase, KnowledgeEntry, WorkflowGuide};
pub use device::{DeviceAuthFailure, DeviceAuthProof, DeviceAuthRejection};
pub use pairing::{PairingClaim, PairingCode, PresenceHeartbeat};
pub use pipeline::{PipelineManifest, StageRecord};
pub use project::{ConceptRelationship, ContextItem, KnowledgeMatch, Project};
pub use session::{ContentMetadata, Session, TranslationEntry, AUTO_LANGUAGE};
