//! Simbioset Core - Entity Types
//!
//! Pure data structures with no I/O. The client and app crates depend on
//! this. This crate contains ONLY data types and local validation - no
//! network calls, no storage.

pub mod artifact;
pub mod enums;
pub mod error;
pub mod identity;
pub mod node;
pub mod paragraph;
pub mod project;

pub use artifact::Artifact;
pub use enums::{ArtifactKind, ConfirmationType, Language, NodeRole, ProjectStatus};
pub use error::{ValidationError, ValidationResult};
pub use identity::{
    ArtifactId, ChatSessionId, DocumentId, EntityIdType, NodeId, ParagraphId, ProjectId, TierId,
    Timestamp,
};
pub use node::{validate_parent_refs, ConceptNode, NodeWithContext, Source};
pub use paragraph::{Paragraph, Tag};
pub use project::{
    Backer, Contributor, CrowdfundedProject, CrowdsourcedProject, FundingTier, Project,
    ProjectIdea,
};
