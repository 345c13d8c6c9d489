//! Session client for the cookie-bound current-session endpoint.

use crate::error::ClientError;
use crate::transport::Transport;
use crate::types::session::ChatSessionInfo;

#[derive(Clone)]
pub struct SessionClient {
    transport: Transport,
}

impl SessionClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch the session bound to the caller's cookie. A failure here means
    /// "no session"; the caller decides how to degrade, and must not assume
    /// a retry happened.
    pub async fn current_session(&self) -> Result<ChatSessionInfo, ClientError> {
        self.transport
            .get_json::<ChatSessionInfo, ()>("/api/chat/session/current", None)
            .await
    }
}
