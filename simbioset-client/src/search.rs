//! Paragraph search client.
//!
//! The one correctness guarantee this wrapper adds over a raw fetch: every
//! response is validated against the expected shape before being returned,
//! and a mismatch raises [`ClientError::Schema`] rather than passing through
//! with missing fields.

use crate::error::ClientError;
use crate::transport::Transport;
use crate::types::search::{ParagraphSearchParams, ParagraphSearchResponse};
use simbioset_core::{DocumentId, Paragraph, ParagraphId};

#[derive(Clone)]
pub struct SearchClient {
    transport: Transport,
}

impl SearchClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Search paragraphs. Only defined filters reach the query string; list
    /// filters join into a comma-separated value.
    pub async fn search_paragraphs(
        &self,
        params: &ParagraphSearchParams,
    ) -> Result<ParagraphSearchResponse, ClientError> {
        let pairs = params.query_pairs();
        let response: ParagraphSearchResponse =
            self.transport.get_validated("/api/search", &pairs).await?;
        response.validate()?;
        Ok(response)
    }

    /// Direct-key paragraph lookup. No fallback search on miss; the failure
    /// is surfaced as-is.
    pub async fn get_paragraph(
        &self,
        document_id: DocumentId,
        paragraph_id: ParagraphId,
    ) -> Result<Paragraph, ClientError> {
        let path = format!(
            "/api/storage/documents/{}/paragraphs/{}",
            document_id, paragraph_id
        );
        self.transport.get_validated(&path, &[]).await
    }
}
