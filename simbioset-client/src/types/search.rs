//! Paragraph-search API types

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use simbioset_core::{DocumentId, Paragraph, Timestamp};

/// Parameters for a paragraph search.
///
/// Only the query is required. A filter is emitted iff it is defined and,
/// for list filters, non-empty; list values join into one comma-separated
/// parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphSearchParams {
    pub query: String,
    pub document_id: Option<DocumentId>,
    /// Results must carry at least one of these tags.
    pub tags: Vec<String>,
    /// Results must carry none of these tags.
    pub exclude_tags: Vec<String>,
    pub location: Option<String>,
    pub ecosystem_id: Option<String>,
    /// Combine keyword and vector scores.
    pub hybrid: Option<bool>,
    /// Weight of the vector score in hybrid mode.
    pub alpha: Option<f32>,
    pub rerank: Option<bool>,
    pub after: Option<Timestamp>,
    pub before: Option<Timestamp>,
}

impl ParagraphSearchParams {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            document_id: None,
            tags: Vec::new(),
            exclude_tags: Vec::new(),
            location: None,
            ecosystem_id: None,
            hybrid: None,
            alpha: None,
            rerank: None,
            after: None,
            before: None,
        }
    }

    /// The literal query pairs sent with the request.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("query".to_string(), self.query.clone())];
        if let Some(document_id) = self.document_id {
            pairs.push(("document_id".to_string(), document_id.to_string()));
        }
        if !self.tags.is_empty() {
            pairs.push(("tags".to_string(), self.tags.join(",")));
        }
        if !self.exclude_tags.is_empty() {
            pairs.push(("exclude_tags".to_string(), self.exclude_tags.join(",")));
        }
        if let Some(location) = &self.location {
            pairs.push(("location".to_string(), location.clone()));
        }
        if let Some(ecosystem_id) = &self.ecosystem_id {
            pairs.push(("ecosystem_id".to_string(), ecosystem_id.clone()));
        }
        if let Some(hybrid) = self.hybrid {
            pairs.push(("hybrid".to_string(), hybrid.to_string()));
        }
        if let Some(alpha) = self.alpha {
            pairs.push(("alpha".to_string(), alpha.to_string()));
        }
        if let Some(rerank) = self.rerank {
            pairs.push(("rerank".to_string(), rerank.to_string()));
        }
        if let Some(after) = self.after {
            pairs.push(("after".to_string(), after.to_rfc3339()));
        }
        if let Some(before) = self.before {
            pairs.push(("before".to_string(), before.to_rfc3339()));
        }
        pairs
    }
}

/// A paragraph with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredParagraph {
    pub paragraph: Paragraph,
    pub score: f32,
}

/// Response to a paragraph search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphSearchResponse {
    pub results: Vec<ScoredParagraph>,
    pub total: u32,
}

impl ParagraphSearchResponse {
    /// Structural check beyond what deserialization guarantees. A response
    /// that fails here signals a contract mismatch with the server.
    pub fn validate(&self) -> Result<(), ClientError> {
        for entry in &self.results {
            if entry.paragraph.content.is_empty() {
                return Err(ClientError::Schema(format!(
                    "paragraph {} has empty content",
                    entry.paragraph.paragraph_id
                )));
            }
            if !entry.score.is_finite() {
                return Err(ClientError::Schema(format!(
                    "paragraph {} has non-finite score",
                    entry.paragraph.paragraph_id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_keys(params: &ParagraphSearchParams) -> Vec<String> {
        params.query_pairs().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn bare_query_emits_only_the_query() {
        let params = ParagraphSearchParams::new("simbiosis");
        assert_eq!(
            params.query_pairs(),
            vec![("query".to_string(), "simbiosis".to_string())]
        );
    }

    #[test]
    fn empty_tag_lists_are_omitted() {
        let mut params = ParagraphSearchParams::new("coral");
        params.tags = Vec::new();
        params.exclude_tags = Vec::new();
        let keys = pair_keys(&params);
        assert!(!keys.contains(&"tags".to_string()));
        assert!(!keys.contains(&"exclude_tags".to_string()));
    }

    #[test]
    fn tag_lists_join_with_commas() {
        let mut params = ParagraphSearchParams::new("coral");
        params.tags = vec!["reef".to_string(), "symbiosis".to_string()];
        let pairs = params.query_pairs();
        assert!(pairs.contains(&("tags".to_string(), "reef,symbiosis".to_string())));
    }

    #[test]
    fn hybrid_and_alpha_emit_when_set() {
        let mut params = ParagraphSearchParams::new("kelp");
        params.hybrid = Some(true);
        params.alpha = Some(0.5);
        let pairs = params.query_pairs();
        assert!(pairs.contains(&("hybrid".to_string(), "true".to_string())));
        assert!(pairs.contains(&("alpha".to_string(), "0.5".to_string())));
    }

    #[test]
    fn validate_rejects_empty_content() {
        let json = serde_json::json!({
            "results": [{
                "paragraph": {
                    "paragraph_id": uuid::Uuid::now_v7(),
                    "content": "",
                    "document_id": uuid::Uuid::now_v7(),
                    "node_id": null,
                    "document_type": "article",
                    "tags": [],
                    "author": null,
                    "location": null,
                    "ecosystem_id": null,
                    "embedding": null,
                    "indexed_at": null
                },
                "score": 0.8
            }],
            "total": 1
        });
        let response: ParagraphSearchResponse = serde_json::from_value(json).unwrap();
        assert!(response.validate().unwrap_err().is_schema());
    }
}
