//! Knowledge-base API types

use serde::{Deserialize, Serialize};
use simbioset_core::{ChatSessionId, ConceptNode, NodeId, NodeRole, Source, Timestamp};

/// Inclusion flags for fetching a single node.
///
/// Absent options never reach the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetNodeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_parent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_children: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_siblings: Option<bool>,
    /// Depth bound for included children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

/// Filters for fetching a subtree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    /// Root of the subtree; the server root when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
}

/// Full-text search over nodes, with the same filters as the tree fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSearchParams {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
}

impl NodeSearchParams {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            limit: None,
            offset: None,
            category: None,
            node_type: None,
        }
    }
}

/// Response containing tree or search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeResponse {
    pub nodes: Vec<ConceptNode>,
    /// Total count before pagination.
    pub total: u32,
}

/// Request to create a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNodeRequest {
    pub content: String,
    pub role: NodeRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
}

/// Request to update a node. Only set fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNodeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    /// Replaces the whole source array when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
}

/// Query for a node delete. `cascade` is never defaulted away: every delete
/// request carries it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteNodeQuery {
    pub cascade: bool,
}

impl Default for DeleteNodeQuery {
    fn default() -> Self {
        Self { cascade: true }
    }
}

impl DeleteNodeQuery {
    /// The literal query pairs sent with the request.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![("cascade".to_string(), self.cascade.to_string())]
    }
}

/// Response to a bulk selection clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearSelectionResponse {
    pub cleared: u32,
}

/// Continue a conversation from a given node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinueRequest {
    pub node_id: NodeId,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<ChatSessionId>,
}

/// The node pair produced by a conversation continuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinueResponse {
    pub user_node: ConceptNode,
    pub assistant_node: ConceptNode,
    pub session_id: ChatSessionId,
}

/// Aggregate knowledge-base statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KbStats {
    pub node_count: u64,
    pub session_count: u64,
    pub source_count: u64,
    pub last_updated: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use simbioset_core::EntityIdType;

    #[test]
    fn absent_tree_filters_are_not_serialized() {
        let params = TreeParams::default();
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn set_tree_filters_are_serialized() {
        let params = TreeParams {
            root_id: Some(NodeId::generate()),
            limit: Some(20),
            offset: None,
            category: Some("ecology".to_string()),
            node_type: None,
        };
        let value = serde_json::to_value(&params).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("root_id"));
        assert!(object.contains_key("limit"));
        assert!(object.contains_key("category"));
        assert!(!object.contains_key("offset"));
        assert!(!object.contains_key("node_type"));
    }

    #[test]
    fn search_params_always_carry_the_query() {
        let params = NodeSearchParams::new("manglar");
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, serde_json::json!({ "query": "manglar" }));
    }

    #[test]
    fn cascade_is_always_explicit() {
        assert_eq!(
            DeleteNodeQuery { cascade: false }.query_pairs(),
            vec![("cascade".to_string(), "false".to_string())]
        );
        assert_eq!(
            DeleteNodeQuery::default().query_pairs(),
            vec![("cascade".to_string(), "true".to_string())]
        );
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let request = UpdateNodeRequest {
            expanded: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "expanded": true }));
    }
}
