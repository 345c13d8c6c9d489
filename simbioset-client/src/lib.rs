//! Typed REST clients for the Simbioset API.
//!
//! One client struct per API family, all sharing a [`Transport`]. Every
//! wrapper performs exactly one request and rejects on a non-success status;
//! retry and backoff policy belong to the backend. Optional filters are
//! serialized only when defined - an absent option never appears in the
//! query string.

pub mod error;
pub mod kb;
pub mod search;
pub mod session;
pub mod tags;
pub mod transport;
pub mod types;

pub use error::ClientError;
pub use kb::KnowledgeBaseClient;
pub use search::SearchClient;
pub use session::SessionClient;
pub use tags::TagClient;
pub use transport::Transport;
