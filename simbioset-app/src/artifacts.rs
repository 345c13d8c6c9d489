//! Artifact store - the one entity the client fully owns.
//!
//! The full list is serialized to the durable file on every change and
//! deserialized once at startup. Missing or corrupt storage is treated as
//! empty, logged, never surfaced to the caller.

use crate::persistence;
use simbioset_core::{Artifact, ArtifactId, ArtifactKind, NodeId};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ArtifactStore {
    artifacts: Vec<Artifact>,
    path: PathBuf,
}

impl ArtifactStore {
    /// Load the store from its durable mirror.
    pub fn load(path: &Path) -> Self {
        let artifacts: Vec<Artifact> = persistence::load_or_default(path);
        Self {
            artifacts,
            path: path.to_path_buf(),
        }
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn by_message(&self, message_id: NodeId) -> Vec<&Artifact> {
        self.artifacts
            .iter()
            .filter(|a| a.message_id == message_id)
            .collect()
    }

    /// Add an artifact. Kind defaults to `note`; content defaults to the
    /// selected text. Returns the stored artifact.
    pub fn add_artifact(
        &mut self,
        message_id: NodeId,
        selected_text: &str,
        content: Option<&str>,
        kind: Option<ArtifactKind>,
    ) -> Artifact {
        let artifact = Artifact::new(message_id, selected_text, content, kind);
        self.artifacts.push(artifact.clone());
        self.mirror();
        artifact
    }

    /// Remove one artifact by id. Returns whether anything was removed.
    pub fn remove_artifact(&mut self, id: ArtifactId) -> bool {
        let before = self.artifacts.len();
        self.artifacts.retain(|a| a.artifact_id != id);
        let removed = self.artifacts.len() != before;
        if removed {
            self.mirror();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.artifacts.clear();
        self.mirror();
    }

    /// Write-through to the durable file. The mirror is a side channel, not
    /// a second writer - a failed write is logged and the in-memory list
    /// stays authoritative.
    fn mirror(&self) {
        if let Err(err) = persistence::save(&self.path, &self.artifacts) {
            tracing::warn!(path = %self.path.display(), error = %err,
                "failed to mirror artifact list");
        }
    }
}
