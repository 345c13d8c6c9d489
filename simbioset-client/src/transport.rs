//! Shared HTTP transport for the API clients.

use crate::error::ClientError;
use std::time::Duration;

/// Thin wrapper around a [`reqwest::Client`] bound to one API base URL.
///
/// All domain clients clone this; it carries no per-request state.
#[derive(Clone)]
pub struct Transport {
    client: reqwest::Client,
    base_url: String,
}

impl Transport {
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the service health endpoint.
    pub async fn health(&self) -> Result<(), ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(url).send().await?;
        check_status(response.status().as_u16(), || "health check".to_string())?;
        Ok(())
    }

    pub async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(url);
        if let Some(query) = query {
            request = request.query(query);
        }
        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// GET with literal query pairs. Used where the exact set of emitted
    /// parameters is part of the contract.
    pub async fn get_with_pairs<T>(
        &self,
        path: &str,
        pairs: &[(String, String)],
    ) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(url).query(pairs).send().await?;
        self.parse_response(response).await
    }

    /// GET that treats a malformed success body as a contract mismatch
    /// ([`ClientError::Schema`]) instead of a transport error.
    pub async fn get_validated<T>(
        &self,
        path: &str,
        pairs: &[(String, String)],
    ) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(url);
        if !pairs.is_empty() {
            request = request.query(pairs);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        decode_validated(status, &text)
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(url).json(body).send().await?;
        self.parse_response(response).await
    }

    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.put(url).json(body).send().await?;
        self.parse_response(response).await
    }

    /// DELETE with literal query pairs. The body, if any, is discarded;
    /// 204 No Content is a success.
    pub async fn delete(
        &self,
        path: &str,
        pairs: &[(String, String)],
    ) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.delete(url).query(pairs).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        decode_json(status, &text)
    }
}

fn check_status(status: u16, context: impl FnOnce() -> String) -> Result<(), ClientError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ClientError::Status {
            status,
            message: context(),
        })
    }
}

/// Decode a response body, surfacing non-success as [`ClientError::Status`]
/// and a malformed success body as [`ClientError::Serde`].
///
/// Free function so the status/decode split is testable without a server.
pub fn decode_json<T: serde::de::DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, ClientError> {
    if !(200..300).contains(&status) {
        return Err(ClientError::Status {
            status,
            message: body.to_string(),
        });
    }
    Ok(serde_json::from_str::<T>(body)?)
}

/// Like [`decode_json`], but a malformed success body is promoted to a
/// contract mismatch ([`ClientError::Schema`]). Used by endpoints whose
/// response shape the caller validates further.
pub fn decode_validated<T: serde::de::DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, ClientError> {
    if !(200..300).contains(&status) {
        return Err(ClientError::Status {
            status,
            message: body.to_string(),
        });
    }
    serde_json::from_str::<T>(body).map_err(|err| ClientError::Schema(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: u32,
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let transport = Transport::new("http://localhost:8080/", 1_000).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8080");
    }

    #[test]
    fn non_success_status_maps_to_status_error() {
        let err = decode_validated::<Probe>(502, "bad gateway").unwrap_err();
        match err {
            ClientError::Status { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[test]
    fn malformed_success_body_maps_to_schema_error() {
        let err = decode_validated::<Probe>(200, r#"{"unexpected": true}"#).unwrap_err();
        assert!(err.is_schema());
    }

    #[test]
    fn well_formed_success_body_decodes() {
        let probe: Probe = decode_validated(200, r#"{"value": 7}"#).unwrap();
        assert_eq!(probe.value, 7);
    }

    #[test]
    fn plain_decode_failure_maps_to_serde_error() {
        let err = decode_json::<Probe>(200, "{ not json").unwrap_err();
        assert!(matches!(err, ClientError::Serde(_)));
        assert!(!err.is_schema());
    }

    #[test]
    fn plain_decode_keeps_the_status_split() {
        let err = decode_json::<Probe>(404, "node not found").unwrap_err();
        match err {
            ClientError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "node not found");
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }
}
