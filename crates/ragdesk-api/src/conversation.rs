//! Conversation endpoints (`/api/v1/conversation/*`)

use std::sync::Arc;

use ragdesk_http::{ApiResponse, GatewayTrait, RequestOptions, Result};
use tracing::debug;

use crate::models::{ChatRequest, ConversationCreate, ConversationUpdate, PageQuery};

/// Client for conversation management
pub struct ConversationApi {
    gateway: Arc<dyn GatewayTrait>,
}

impl ConversationApi {
    pub fn new(gateway: Arc<dyn GatewayTrait>) -> Self {
        Self { gateway }
    }

    /// Create a conversation
    pub async fn create(&self, payload: ConversationCreate) -> Result<ApiResponse> {
        debug!("creating conversation with model {}", payload.available_model_id);
        let body = serde_json::to_value(&payload)?;
        self.gateway
            .post(
                "/api/v1/conversation/create",
                RequestOptions::new().with_json(body),
            )
            .await
    }

    /// Update a conversation's settings
    pub async fn update(&self, payload: ConversationUpdate) -> Result<ApiResponse> {
        let body = serde_json::to_value(&payload)?;
        self.gateway
            .post(
                "/api/v1/conversation/update",
                RequestOptions::new().with_json(body),
            )
            .await
    }

    /// Delete a conversation
    pub async fn delete(&self, conv_id: &str) -> Result<ApiResponse> {
        self.gateway
            .post(
                "/api/v1/conversation/delete",
                RequestOptions::new().with_param("conv_id", conv_id),
            )
            .await
    }

    /// Paged conversation listing
    pub async fn list(&self, query: PageQuery) -> Result<ApiResponse> {
        let mut options = RequestOptions::new();
        if let Some(page) = query.page {
            options = options.with_param("page", page.to_string());
        }
        if let Some(size) = query.size {
            options = options.with_param("size", size.to_string());
        }
        self.gateway.get("/api/v1/conversation/list", options).await
    }

    /// Fetch a conversation's message history, newest-first up to `limit`
    pub async fn message_history(&self, conv_id: &str, limit: Option<u32>) -> Result<ApiResponse> {
        let mut options = RequestOptions::new().with_param("conv_id", conv_id);
        if let Some(limit) = limit {
            options = options.with_param("limit", limit.to_string());
        }
        self.gateway
            .get("/api/v1/conversation/messages/history", options)
            .await
    }

    /// Clear a conversation's message history
    pub async fn clear_history(&self, conv_id: &str) -> Result<ApiResponse> {
        self.gateway
            .post(
                "/api/v1/conversation/messages/clear",
                RequestOptions::new().with_param("conv_id", conv_id),
            )
            .await
    }

    /// One-shot chat completion outside any stored conversation
    pub async fn chat(&self, payload: ChatRequest) -> Result<ApiResponse> {
        let body = serde_json::to_value(&payload)?;
        self.gateway
            .post("/api/v1/chat", RequestOptions::new().with_json(body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingGateway;
    use ragdesk_http::Method;

    #[tokio::test]
    async fn test_create_serializes_required_fields() {
        let gateway = Arc::new(RecordingGateway::default());
        let api = ConversationApi::new(gateway.clone());

        api.create(ConversationCreate {
            available_model_id: "m1".to_string(),
            system_prompt: "be brief".to_string(),
            temperature: 0.7,
            ..Default::default()
        })
        .await
        .unwrap();

        let call = gateway.last_call();
        assert_eq!(call.path, "/api/v1/conversation/create");
        let body = call.options.body.unwrap();
        assert_eq!(body["available_model_id"], "m1");
        assert_eq!(body["temperature"], 0.7);
        assert!(body.get("title").is_none());
    }

    #[tokio::test]
    async fn test_delete_and_list() {
        let gateway = Arc::new(RecordingGateway::default());
        let api = ConversationApi::new(gateway.clone());

        api.delete("c9").await.unwrap();
        assert_eq!(
            gateway.last_call().options.params,
            vec![("conv_id".to_string(), "c9".to_string())]
        );

        api.list(PageQuery {
            page: Some(1),
            size: None,
        })
        .await
        .unwrap();
        let call = gateway.last_call();
        assert_eq!(call.method, Method::GET);
        assert_eq!(call.options.params, vec![("page".to_string(), "1".to_string())]);
    }

    #[tokio::test]
    async fn test_history_endpoints() {
        let gateway = Arc::new(RecordingGateway::default());
        let api = ConversationApi::new(gateway.clone());

        api.message_history("c9", Some(50)).await.unwrap();
        let call = gateway.last_call();
        assert_eq!(call.method, Method::GET);
        assert_eq!(call.path, "/api/v1/conversation/messages/history");
        assert_eq!(
            call.options.params,
            vec![
                ("conv_id".to_string(), "c9".to_string()),
                ("limit".to_string(), "50".to_string()),
            ]
        );

        api.clear_history("c9").await.unwrap();
        let call = gateway.last_call();
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.path, "/api/v1/conversation/messages/clear");
        assert_eq!(call.options.params, vec![("conv_id".to_string(), "c9".to_string())]);
    }

    #[tokio::test]
    async fn test_chat_posts_messages() {
        let gateway = Arc::new(RecordingGateway::default());
        let api = ConversationApi::new(gateway.clone());

        api.chat(crate::models::ChatRequest {
            messages: vec![crate::models::ChatMessage {
                role: "user".to_string(),
                content: "summarize the handbook".to_string(),
            }],
            temperature: Some(0.2),
            ..Default::default()
        })
        .await
        .unwrap();

        let call = gateway.last_call();
        assert_eq!(call.path, "/api/v1/chat");
        let body = call.options.body.unwrap();
        assert_eq!(body["messages"][0]["content"], "summarize the handbook");
        assert_eq!(body["temperature"], 0.2);
        assert!(body.get("stream").is_none());
    }
}
