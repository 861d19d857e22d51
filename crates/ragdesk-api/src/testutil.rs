//! Test doubles shared by the endpoint modules

use std::sync::Mutex;

use async_trait::async_trait;
use ragdesk_http::{
    header::HeaderMap, ApiResponse, GatewayTrait, Method, RequestOptions, Result, StatusCode,
};
use serde_json::json;

/// One captured gateway invocation
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub options: RequestOptions,
}

/// Gateway double that records calls and answers with an envelope success
#[derive(Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingGateway {
    pub fn last_call(&self) -> RecordedCall {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no gateway call recorded")
    }
}

#[async_trait]
impl GatewayTrait for RecordingGateway {
    async fn get(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.request(Method::GET, path, options).await
    }

    async fn post(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.request(Method::POST, path, options).await
    }

    async fn put(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.request(Method::PUT, path, options).await
    }

    async fn delete(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.request(Method::DELETE, path, options).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            options,
        });

        let body = json!({"status_code": 200, "data": null});
        let raw = serde_json::to_vec(&body)?;
        Ok(ApiResponse::new(StatusCode::OK, HeaderMap::new(), raw, Some(body)))
    }
}
