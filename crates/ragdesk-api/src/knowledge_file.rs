//! Knowledge-base file endpoints (`/api/v1/knowledge_file/*`)

use std::sync::Arc;

use ragdesk_http::{ApiResponse, FilePart, GatewayTrait, RequestOptions, Result};
use tracing::debug;

use crate::models::{KnowledgeFileExecute, KnowledgeFileListQuery};

/// Client for knowledge-base file ingestion and management
pub struct KnowledgeFileApi {
    gateway: Arc<dyn GatewayTrait>,
}

impl KnowledgeFileApi {
    pub fn new(gateway: Arc<dyn GatewayTrait>) -> Self {
        Self { gateway }
    }

    /// Upload one file as multipart form data
    pub async fn upload(&self, file: FilePart) -> Result<ApiResponse> {
        debug!("uploading knowledge file {}", file.file_name);
        self.gateway
            .post(
                "/api/v1/knowledge_file/upload",
                RequestOptions::new().with_file(file),
            )
            .await
    }

    /// Run chunking and vectorization over uploaded files
    pub async fn execute(&self, payload: KnowledgeFileExecute) -> Result<ApiResponse> {
        let body = serde_json::to_value(&payload)?;
        self.gateway
            .post(
                "/api/v1/knowledge_file/execute",
                RequestOptions::new().with_json(body),
            )
            .await
    }

    /// Paged file listing for one knowledge base
    pub async fn list(&self, query: KnowledgeFileListQuery) -> Result<ApiResponse> {
        let mut options = RequestOptions::new().with_param("kb_id", query.kb_id);
        if let Some(page) = query.page {
            options = options.with_param("page", page.to_string());
        }
        if let Some(size) = query.size {
            options = options.with_param("size", size.to_string());
        }
        self.gateway.get("/api/v1/knowledge_file/list", options).await
    }

    /// Delete a file by id
    pub async fn delete(&self, id: &str) -> Result<ApiResponse> {
        self.gateway
            .post(
                "/api/v1/knowledge_file/delete",
                RequestOptions::new().with_param("id", id),
            )
            .await
    }
}
