//! Knowledge-tree node structures

use crate::enums::{ConfirmationType, NodeRole};
use crate::error::{ValidationError, ValidationResult};
use crate::identity::{EntityIdType, NodeId, Timestamp};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A node in the knowledge/conversation tree.
///
/// Nodes are server-owned records; the client holds transient copies and
/// never patches them optimistically - every mutation re-fetches or receives
/// the updated record in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptNode {
    pub node_id: NodeId,
    /// Weak reference: lookup only, no ownership. None for root nodes.
    pub parent_id: Option<NodeId>,
    pub content: String,
    pub role: NodeRole,
    pub expanded: bool,
    pub selected: bool,
    /// Evidence attached to this node, in attachment order. Updates replace
    /// the whole array; entries are never mutated in place.
    pub sources: Vec<Source>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ConceptNode {
    /// Create a new root node with the given content and role.
    pub fn new(content: &str, role: NodeRole) -> Self {
        let now = Utc::now();
        Self {
            node_id: NodeId::generate(),
            parent_id: None,
            content: content.to_string(),
            role,
            expanded: false,
            selected: false,
            sources: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the parent reference.
    pub fn with_parent(mut self, parent_id: NodeId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Attach a source.
    pub fn with_source(mut self, source: Source) -> Self {
        self.sources.push(source);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A node plus optionally materialized relatives.
///
/// Populated on demand by request flags; a read-time projection, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeWithContext {
    pub node: ConceptNode,
    pub parent: Option<ConceptNode>,
    pub children: Option<Vec<ConceptNode>>,
    pub siblings: Option<Vec<ConceptNode>>,
}

/// Evidence attached to a node. Owned by exactly one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    pub title: Option<String>,
    pub confirmation: ConfirmationType,
    pub sentiment: Option<String>,
    pub tool: Option<String>,
    /// Reliability score in [0, 1] when the backend provides one.
    pub reliability: Option<f32>,
    pub user_confirmed: bool,
}

impl Source {
    pub fn new(url: &str, confirmation: ConfirmationType) -> Self {
        Self {
            url: url.to_string(),
            title: None,
            confirmation,
            sentiment: None,
            tool: None,
            reliability: None,
            user_confirmed: false,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_reliability(mut self, reliability: f32) -> Self {
        self.reliability = Some(reliability);
        self
    }
}

/// Check that every parent reference resolves to a node in the set.
///
/// Root nodes (no parent) always pass. Fails on the first dangling
/// reference encountered.
pub fn validate_parent_refs(nodes: &[ConceptNode]) -> ValidationResult<()> {
    let ids: HashSet<NodeId> = nodes.iter().map(|n| n.node_id).collect();
    for node in nodes {
        if let Some(parent_id) = node.parent_id {
            if !ids.contains(&parent_id) {
                return Err(ValidationError::DanglingParent {
                    node_id: node.node_id,
                    parent_id,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_node_has_no_parent() {
        let node = ConceptNode::new("What is a mycorrhizal network?", NodeRole::User);
        assert!(node.is_root());
        assert!(node.sources.is_empty());
    }

    #[test]
    fn parent_refs_resolve_within_set() {
        let root = ConceptNode::new("root", NodeRole::System);
        let child =
            ConceptNode::new("child", NodeRole::Assistant).with_parent(root.node_id);
        assert!(validate_parent_refs(&[root, child]).is_ok());
    }

    #[test]
    fn dangling_parent_is_rejected() {
        let orphan =
            ConceptNode::new("orphan", NodeRole::User).with_parent(NodeId::generate());
        let err = validate_parent_refs(std::slice::from_ref(&orphan)).unwrap_err();
        assert!(matches!(err, ValidationError::DanglingParent { node_id, .. }
            if node_id == orphan.node_id));
    }

    #[test]
    fn node_round_trips_through_json() {
        let node = ConceptNode::new("Los corales albergan zooxantelas", NodeRole::Assistant)
            .with_source(
                Source::new("https://example.org/reef", ConfirmationType::Confirm)
                    .with_title("Reef symbiosis")
                    .with_reliability(0.9),
            );
        let json = serde_json::to_string(&node).unwrap();
        let back: ConceptNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
