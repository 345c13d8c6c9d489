//! Identity types for Simbioset entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Common behavior for typed entity IDs.
///
/// IDs are UUIDv7: the embedded Unix timestamp makes them sortable by
/// creation time, and the random tail makes collisions negligible.
pub trait EntityIdType: Copy + fmt::Display {
    /// Wrap an existing UUID.
    fn new(id: Uuid) -> Self;
    /// Generate a fresh timestamp-sortable ID.
    fn generate() -> Self;
    /// The underlying UUID.
    fn as_uuid(&self) -> Uuid;
}

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl EntityIdType for $name {
            fn new(id: Uuid) -> Self {
                Self(id)
            }

            fn generate() -> Self {
                Self(Uuid::now_v7())
            }

            fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Identifier of a node in the knowledge/conversation tree.
    NodeId
);
entity_id!(
    /// Identifier of a chat session grouping conversation nodes.
    ChatSessionId
);
entity_id!(
    /// Identifier of a source document in the paragraph store.
    DocumentId
);
entity_id!(
    /// Identifier of a retrievable paragraph within a document.
    ParagraphId
);
entity_id!(
    /// Identifier of a crowdfunded or crowdsourced project.
    ProjectId
);
entity_id!(
    /// Identifier of a funding tier within a project.
    TierId
);
entity_id!(
    /// Identifier of a user-curated artifact. Local to the client.
    ArtifactId
);
