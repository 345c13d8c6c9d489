//! Tag/classification API types

use serde::{Deserialize, Serialize};
use simbioset_core::Tag;

/// Request to create a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub examples: Vec<String>,
}

/// Request to update a tag. Only set fields change; `active: Some(false)`
/// is a soft deactivation, never a deletion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTagRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

/// Result of an AI-assisted tag analysis pass.
///
/// The three lists are distinct outcomes and must be surfaced separately,
/// never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagAnalysis {
    /// Newly discovered tags.
    pub discovered: Vec<Tag>,
    /// Existing tags whose metadata changed.
    pub updated: Vec<Tag>,
    /// Tags deactivated as a result of the analysis.
    pub deactivated: Vec<Tag>,
}

/// Candidate tag names for a piece of text. Returned in server order; the
/// client performs no local ranking or filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSuggestions {
    pub suggestions: Vec<String>,
}
