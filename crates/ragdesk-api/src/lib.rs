//! Typed endpoint clients for the RagDesk backend
//!
//! Thin wrappers over [`ragdesk_http::Gateway`], one service struct per
//! backend area. Every method resolves with the full [`ApiResponse`]
//! (callers read `.data()` themselves) and surfaces failures the way the
//! gateway does.
//!
//! [`ApiResponse`]: ragdesk_http::ApiResponse

pub mod conversation;
pub mod knowledge;
pub mod knowledge_file;
pub mod model_cfg;
pub mod models;

#[cfg(test)]
pub(crate) mod testutil;

pub use conversation::ConversationApi;
pub use knowledge::KnowledgeApi;
pub use knowledge_file::KnowledgeFileApi;
pub use model_cfg::ModelCfgApi;
pub use models::{
    AvailableModelAdd, ChatMessage, ChatRequest, ConversationCreate, ConversationUpdate,
    KnowledgeCreate, KnowledgeFileExecute, KnowledgeFileListQuery, KnowledgeListQuery,
    KnowledgeUpdate, ModelCfgCreate, PageQuery, SetDefaultModelCfg,
};
