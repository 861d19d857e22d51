//! Request payloads for the backend endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Knowledge-base creation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Embedding model used for vectorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    /// 1 enables layout recognition during ingestion, 0 disables it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_layout: Option<i32>,
}

/// Knowledge-base update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeUpdate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// Paged knowledge-base listing, optionally filtered by name
#[derive(Debug, Clone, Default)]
pub struct KnowledgeListQuery {
    pub name: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Plain pagination query
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Conversation creation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub available_model_id: String,
    pub system_prompt: String,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_base_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_memory: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_server_configs: Option<Value>,
}

/// Conversation update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationUpdate {
    pub conv_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_base_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_memory: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_server_configs: Option<Value>,
}

/// Model provider configuration payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelCfgCreate {
    pub provider_id: String,
    pub api_key: String,
    pub base_url: String,
}

/// Default LLM and embedding model selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetDefaultModelCfg {
    pub model_cfg_id: String,
    pub llm_name: String,
    pub embedding_name: String,
}

/// Payload registering a model under a provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailableModelAdd {
    pub setting_id: String,
    pub name: String,
    /// `llm` or `embedding`
    #[serde(rename = "type")]
    pub model_type: String,
}

/// Chunking and ingestion parameters for uploaded knowledge files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeFileExecute {
    pub kb_id: String,
    pub file_object_names: Vec<String>,
    pub auto: bool,
    pub chunk_size: u32,
    pub repeat_size: u32,
    pub separator: String,
}

/// Paged file listing scoped to one knowledge base
#[derive(Debug, Clone, Default)]
pub struct KnowledgeFileListQuery {
    pub kb_id: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// One turn of a chat exchange
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `user` or `assistant`
    pub role: String,
    pub content: String,
}

/// Direct chat completion payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}
