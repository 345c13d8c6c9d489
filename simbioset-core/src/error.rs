//! Error types for Simbioset entity validation

use crate::identity::NodeId;
use thiserror::Error;

/// Validation errors raised by local invariant checks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Node {node_id} references missing parent {parent_id}")]
    DanglingParent { node_id: NodeId, parent_id: NodeId },

    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },
}

/// Result type alias for validation checks.
pub type ValidationResult<T> = Result<T, ValidationError>;
