//! Searchable paragraphs and classification tags

use crate::identity::{DocumentId, NodeId, ParagraphId, Timestamp};
use serde::{Deserialize, Serialize};

/// A retrievable unit of document text indexed for search.
///
/// Paragraphs are retrieved, never created, by this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub paragraph_id: ParagraphId,
    pub content: String,
    pub document_id: DocumentId,
    pub node_id: Option<NodeId>,
    pub document_type: String,
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub location: Option<String>,
    pub ecosystem_id: Option<String>,
    /// Embedding vector, present when the backend returns it.
    pub embedding: Option<Vec<f32>>,
    pub indexed_at: Option<Timestamp>,
}

/// A classification label attachable to paragraphs and nodes.
///
/// The name is the unique key. Deactivation is a soft flag, not deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub usage_count: u64,
    pub active: bool,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            category: None,
            usage_count: 0,
            active: true,
            examples: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}
