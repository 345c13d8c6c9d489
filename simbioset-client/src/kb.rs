//! Knowledge-base client: node CRUD, tree fetch, search, flags, sources,
//! conversation continuation, sessions and stats under `/api/kb`.

use crate::error::ClientError;
use crate::transport::Transport;
use crate::types::kb::{
    ClearSelectionResponse, ContinueRequest, ContinueResponse, CreateNodeRequest,
    DeleteNodeQuery, GetNodeParams, KbStats, NodeSearchParams, TreeParams, TreeResponse,
    UpdateNodeRequest,
};
use crate::types::session::ChatSessionInfo;
use simbioset_core::{ChatSessionId, ConceptNode, NodeId, NodeWithContext, Source};

const BASE: &str = "/api/kb";

/// Typed wrapper for the knowledge-base API family.
///
/// Every method performs exactly one request and rejects on a non-success
/// status. No retries, no in-flight cancellation; a caller that goes away
/// mid-request simply discards the result.
#[derive(Clone)]
pub struct KnowledgeBaseClient {
    transport: Transport,
}

impl KnowledgeBaseClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch one node, optionally with parent/children/siblings materialized.
    pub async fn get_node(
        &self,
        id: NodeId,
        params: &GetNodeParams,
    ) -> Result<NodeWithContext, ClientError> {
        let path = format!("{}/nodes/{}", BASE, id);
        self.transport.get_json(&path, Some(params)).await
    }

    /// Fetch the root node of the knowledge tree.
    pub async fn get_root(&self) -> Result<ConceptNode, ClientError> {
        self.transport
            .get_json::<ConceptNode, ()>(&format!("{}/root", BASE), None)
            .await
    }

    /// Fetch a subtree with pagination and category/type filters.
    pub async fn get_tree(&self, params: &TreeParams) -> Result<TreeResponse, ClientError> {
        self.transport
            .get_json(&format!("{}/tree", BASE), Some(params))
            .await
    }

    /// Full-text search over nodes.
    pub async fn search_nodes(
        &self,
        params: &NodeSearchParams,
    ) -> Result<TreeResponse, ClientError> {
        self.transport
            .get_json(&format!("{}/search", BASE), Some(params))
            .await
    }

    pub async fn create_node(
        &self,
        request: &CreateNodeRequest,
    ) -> Result<ConceptNode, ClientError> {
        self.transport
            .post_json(&format!("{}/nodes", BASE), request)
            .await
    }

    pub async fn update_node(
        &self,
        id: NodeId,
        request: &UpdateNodeRequest,
    ) -> Result<ConceptNode, ClientError> {
        self.transport
            .put_json(&format!("{}/nodes/{}", BASE, id), request)
            .await
    }

    /// Delete a node. `cascade` controls whether descendants go with it and
    /// is always sent explicitly, even when callers use the default of true.
    pub async fn delete_node(&self, id: NodeId, cascade: bool) -> Result<(), ClientError> {
        let pairs = DeleteNodeQuery { cascade }.query_pairs();
        self.transport
            .delete(&format!("{}/nodes/{}", BASE, id), &pairs)
            .await
    }

    pub async fn set_expanded(
        &self,
        id: NodeId,
        expanded: bool,
    ) -> Result<ConceptNode, ClientError> {
        self.transport
            .put_json(
                &format!("{}/nodes/{}/expanded", BASE, id),
                &serde_json::json!({ "expanded": expanded }),
            )
            .await
    }

    pub async fn set_selected(
        &self,
        id: NodeId,
        selected: bool,
    ) -> Result<ConceptNode, ClientError> {
        self.transport
            .put_json(
                &format!("{}/nodes/{}/selected", BASE, id),
                &serde_json::json!({ "selected": selected }),
            )
            .await
    }

    /// Flip the expanded flag server-side and return the updated node.
    pub async fn toggle_expanded(&self, id: NodeId) -> Result<ConceptNode, ClientError> {
        self.transport
            .post_json(
                &format!("{}/nodes/{}/expanded/toggle", BASE, id),
                &serde_json::json!({}),
            )
            .await
    }

    /// Flip the selected flag server-side and return the updated node.
    pub async fn toggle_selected(&self, id: NodeId) -> Result<ConceptNode, ClientError> {
        self.transport
            .post_json(
                &format!("{}/nodes/{}/selected/toggle", BASE, id),
                &serde_json::json!({}),
            )
            .await
    }

    /// Clear the selected flag on every node.
    pub async fn clear_selection(&self) -> Result<ClearSelectionResponse, ClientError> {
        self.transport
            .post_json(&format!("{}/selection/clear", BASE), &serde_json::json!({}))
            .await
    }

    pub async fn list_sessions(&self) -> Result<Vec<ChatSessionInfo>, ClientError> {
        self.transport
            .get_json::<Vec<ChatSessionInfo>, ()>(&format!("{}/sessions", BASE), None)
            .await
    }

    pub async fn get_session(
        &self,
        id: ChatSessionId,
    ) -> Result<ChatSessionInfo, ClientError> {
        self.transport
            .get_json::<ChatSessionInfo, ()>(&format!("{}/sessions/{}", BASE, id), None)
            .await
    }

    /// Attach a source to a node. The server replaces the source array and
    /// returns the updated node.
    pub async fn attach_source(
        &self,
        id: NodeId,
        source: &Source,
    ) -> Result<ConceptNode, ClientError> {
        self.transport
            .post_json(&format!("{}/nodes/{}/sources", BASE, id), source)
            .await
    }

    /// Continue the conversation from a node with a new user message.
    pub async fn continue_conversation(
        &self,
        request: &ContinueRequest,
    ) -> Result<ContinueResponse, ClientError> {
        self.transport
            .post_json(&format!("{}/continue", BASE), request)
            .await
    }

    pub async fn get_stats(&self) -> Result<KbStats, ClientError> {
        self.transport
            .get_json::<KbStats, ()>(&format!("{}/stats", BASE), None)
            .await
    }
}
