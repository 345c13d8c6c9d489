//! Session accessor.

use simbioset_client::SessionClient;
use simbioset_core::ChatSessionId;

/// Holds the opaque session identifier for the lifetime of the process.
///
/// `None` means "unauthenticated/no session" - a failed load is logged and
/// left at `None`; callers must not assume a retry happened.
#[derive(Debug, Default)]
pub struct SessionState {
    session_id: Option<ChatSessionId>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_id(&self) -> Option<ChatSessionId> {
        self.session_id
    }

    /// Fetch the session from the cookie-bound endpoint.
    pub async fn load(&mut self, client: &SessionClient) {
        match client.current_session().await {
            Ok(info) => {
                self.session_id = Some(info.session_id);
            }
            Err(err) => {
                tracing::warn!(error = %err, "session load failed, continuing without one");
                self.session_id = None;
            }
        }
    }

    /// A full re-invocation of [`SessionState::load`]; no diffing.
    pub async fn refresh(&mut self, client: &SessionClient) {
        self.load(client).await;
    }
}
