//! Chat-session API types

use serde::{Deserialize, Serialize};
use simbioset_core::{ChatSessionId, Timestamp};

/// A chat session grouping conversation nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSessionInfo {
    pub session_id: ChatSessionId,
    pub title: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub node_count: u32,
}
