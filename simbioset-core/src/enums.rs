//! Enum types for Simbioset entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a node in the conversation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    User,
    Assistant,
    System,
}

/// How a source relates to the claim it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationType {
    /// The source supports the claim.
    Confirm,
    /// The source casts doubt on the claim.
    Doubt,
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Active,
    Completed,
    Archived,
    Failed,
}

/// Category of a user-curated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Free-form note. The default when no kind is given.
    #[default]
    Note,
    /// Verbatim quotation from a message.
    Quote,
    /// A question to follow up on.
    Question,
    /// A distilled insight.
    Insight,
}

/// Interface language. Two fixed codes; Spanish is the canonical default,
/// the translation table maps canonical strings to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub const DEFAULT: Language = Language::Es;

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(crate::error::ValidationError::InvalidValue {
                field: "language".to_string(),
                reason: format!("unknown language code '{}'", other),
            }),
        }
    }
}
