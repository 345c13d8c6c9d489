//! Tag/classification client for `/api/classify/tags`.

use crate::error::ClientError;
use crate::transport::Transport;
use crate::types::tags::{CreateTagRequest, TagAnalysis, TagSuggestions, UpdateTagRequest};
use simbioset_core::Tag;

const BASE: &str = "/api/classify/tags";

#[derive(Clone)]
pub struct TagClient {
    transport: Transport,
}

impl TagClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List tags. The `active_only` filter is emitted only when requested.
    pub async fn get_tags(&self, active_only: bool) -> Result<Vec<Tag>, ClientError> {
        if active_only {
            let pairs = [("active_only".to_string(), "true".to_string())];
            self.transport.get_with_pairs(BASE, &pairs).await
        } else {
            self.transport.get_json::<Vec<Tag>, ()>(BASE, None).await
        }
    }

    pub async fn get_tag(&self, name: &str) -> Result<Tag, ClientError> {
        self.transport
            .get_json::<Tag, ()>(&format!("{}/{}", BASE, name), None)
            .await
    }

    pub async fn create_tag(&self, request: &CreateTagRequest) -> Result<Tag, ClientError> {
        self.transport.post_json(BASE, request).await
    }

    pub async fn update_tag(
        &self,
        name: &str,
        request: &UpdateTagRequest,
    ) -> Result<Tag, ClientError> {
        self.transport
            .put_json(&format!("{}/{}", BASE, name), request)
            .await
    }

    /// Instruct the backend to sample existing content and rework the tag
    /// set. A write-triggering read: the response carries discovered,
    /// updated and deactivated tags as three separate lists.
    pub async fn analyze_tags(
        &self,
        sample_size: Option<u32>,
    ) -> Result<TagAnalysis, ClientError> {
        let mut body = serde_json::Map::new();
        if let Some(sample_size) = sample_size {
            body.insert("sample_size".to_string(), sample_size.into());
        }
        self.transport
            .post_json(&format!("{}/analyze", BASE), &body)
            .await
    }

    /// Candidate tag names for a paragraph. Returned in server order, no
    /// local ranking or filtering.
    pub async fn suggest_tags(&self, content: &str) -> Result<Vec<String>, ClientError> {
        let response: TagSuggestions = self
            .transport
            .post_json(
                &format!("{}/suggest", BASE),
                &serde_json::json!({ "content": content }),
            )
            .await?;
        Ok(response.suggestions)
    }
}
