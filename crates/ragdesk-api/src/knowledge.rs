//! Knowledge-base endpoints (`/api/v1/knowledge/*`)

use std::sync::Arc;

use ragdesk_http::{ApiResponse, GatewayTrait, RequestOptions, Result};
use tracing::debug;

use crate::models::{KnowledgeCreate, KnowledgeListQuery, KnowledgeUpdate};

/// Client for knowledge-base management
pub struct KnowledgeApi {
    gateway: Arc<dyn GatewayTrait>,
}

impl KnowledgeApi {
    pub fn new(gateway: Arc<dyn GatewayTrait>) -> Self {
        Self { gateway }
    }

    /// Create a knowledge base
    pub async fn create(&self, payload: KnowledgeCreate) -> Result<ApiResponse> {
        debug!("creating knowledge base {}", payload.name);
        let body = serde_json::to_value(&payload)?;
        self.gateway
            .post("/api/v1/knowledge/create", RequestOptions::new().with_json(body))
            .await
    }

    /// Update name or description of a knowledge base
    pub async fn update(&self, payload: KnowledgeUpdate) -> Result<ApiResponse> {
        let body = serde_json::to_value(&payload)?;
        self.gateway
            .post("/api/v1/knowledge/update", RequestOptions::new().with_json(body))
            .await
    }

    /// Delete a knowledge base by id
    pub async fn delete(&self, id: &str) -> Result<ApiResponse> {
        self.gateway
            .post(
                "/api/v1/knowledge/delete",
                RequestOptions::new().with_param("id", id),
            )
            .await
    }

    /// Fetch one knowledge base by id
    pub async fn get(&self, kb_id: &str) -> Result<ApiResponse> {
        self.gateway
            .get(
                "/api/v1/knowledge/one",
                RequestOptions::new().with_param("kb_id", kb_id),
            )
            .await
    }

    /// Paged listing, optionally filtered by name
    pub async fn list(&self, query: KnowledgeListQuery) -> Result<ApiResponse> {
        let mut options = RequestOptions::new();
        if let Some(name) = &query.name {
            options = options.with_param("name", name);
        }
        if let Some(page) = query.page {
            options = options.with_param("page", page.to_string());
        }
        if let Some(size) = query.size {
            options = options.with_param("size", size.to_string());
        }
        self.gateway.get("/api/v1/knowledge/list", options).await
    }
}
