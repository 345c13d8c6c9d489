//! User-curated artifacts saved from conversations

use crate::enums::ArtifactKind;
use crate::identity::{ArtifactId, EntityIdType, NodeId, Timestamp};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A highlight extracted from a chat message.
///
/// Artifacts are the one entity the client fully owns: created by explicit
/// user action, mirrored to durable local storage on every change, never
/// sent to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub artifact_id: ArtifactId,
    /// The message (node) the artifact was extracted from.
    pub message_id: NodeId,
    pub content: String,
    pub selected_text: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub kind: ArtifactKind,
}

impl Artifact {
    /// Create a new artifact. When `content` is absent the selected text is
    /// stored as the content; `kind` defaults to [`ArtifactKind::Note`].
    pub fn new(
        message_id: NodeId,
        selected_text: &str,
        content: Option<&str>,
        kind: Option<ArtifactKind>,
    ) -> Self {
        Self {
            artifact_id: ArtifactId::generate(),
            message_id,
            content: content.unwrap_or(selected_text).to_string(),
            selected_text: selected_text.to_string(),
            created_at: Utc::now(),
            kind: kind.unwrap_or_default(),
        }
    }
}
