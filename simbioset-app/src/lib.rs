//! Session-lifetime state for the Simbioset client.
//!
//! Each store here is an explicitly constructed object passed down by the
//! shell - no ambient singletons. The translation table and session id are
//! the only process-wide mutable state; the artifact list is the one entity
//! the client fully owns, mirrored to durable local storage.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod funding;
pub mod i18n;
pub mod persistence;
pub mod routes;
pub mod session;

pub use artifacts::ArtifactStore;
pub use config::AppConfig;
pub use error::AppError;
pub use funding::{BackingRecord, FundingDialog, FundingError, FundingState, TierChoice};
pub use i18n::I18n;
pub use routes::Route;
pub use session::SessionState;
