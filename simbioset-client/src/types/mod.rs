//! Request and response types for the Simbioset API.

pub mod kb;
pub mod search;
pub mod session;
pub mod tags;

pub use kb::{
    ClearSelectionResponse, ContinueRequest, ContinueResponse, CreateNodeRequest,
    DeleteNodeQuery, GetNodeParams, KbStats, NodeSearchParams, TreeParams, TreeResponse,
    UpdateNodeRequest,
};
pub use search::{ParagraphSearchParams, ParagraphSearchResponse, ScoredParagraph};
pub use session::ChatSessionInfo;
pub use tags::{CreateTagRequest, TagAnalysis, TagSuggestions, UpdateTagRequest};
