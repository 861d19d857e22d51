//! Gateway client implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Method, StatusCode,
};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::{
    config::GatewayConfig,
    envelope::{ApiResponse, Verdict},
    error::{status_message, GatewayError, Result, PROTOCOL_MISMATCH_MESSAGE},
    notify::{Notifier, TracingNotifier},
};

/// Response-type hint, mirroring the `responseType` request option.
///
/// Binary hints bypass envelope interpretation entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseType {
    #[default]
    Json,
    Blob,
    ArrayBuffer,
}

impl ResponseType {
    pub fn is_binary(self) -> bool {
        matches!(self, ResponseType::Blob | ResponseType::ArrayBuffer)
    }
}

/// One file for a multipart upload.
///
/// Held as owned bytes so options stay cloneable; the transport form is
/// assembled at send time.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Multipart field name, `file` for the backend's upload endpoints
    pub name: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            name: "file".to_string(),
            file_name: file_name.into(),
            bytes,
            mime: mime.into(),
        }
    }
}

/// Per-request options: query params, JSON body, header overrides, and the
/// response-type hint.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
    pub file: Option<FilePart>,
    pub headers: HeaderMap,
    pub response_type: ResponseType,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Set the JSON request body
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a file, switching the request to a multipart upload
    pub fn with_file(mut self, file: FilePart) -> Self {
        self.file = Some(file);
        self
    }

    /// Override a request header
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the response-type hint
    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    /// Shorthand for a blob download
    pub fn binary() -> Self {
        Self::default().with_response_type(ResponseType::Blob)
    }
}

/// Mockable gateway trait
#[async_trait]
pub trait GatewayTrait: Send + Sync {
    /// Execute a GET request
    async fn get(&self, path: &str, options: RequestOptions) -> Result<ApiResponse>;

    /// Execute a POST request
    async fn post(&self, path: &str, options: RequestOptions) -> Result<ApiResponse>;

    /// Execute a PUT request
    async fn put(&self, path: &str, options: RequestOptions) -> Result<ApiResponse>;

    /// Execute a DELETE request
    async fn delete(&self, path: &str, options: RequestOptions) -> Result<ApiResponse>;

    /// Execute a custom HTTP request
    async fn request(&self, method: Method, path: &str, options: RequestOptions)
        -> Result<ApiResponse>;
}

/// Production gateway
///
/// Holds no per-request state; a single instance serves unbounded
/// concurrent callers.
pub struct Gateway {
    inner: reqwest::Client,
    base: Url,
    config: GatewayConfig,
    notifier: Arc<dyn Notifier>,
}

impl Gateway {
    /// Create a gateway with the default `tracing` notification sink
    pub fn new(config: GatewayConfig) -> Result<Self> {
        Self::with_notifier(config, Arc::new(TracingNotifier))
    }

    /// Create a gateway with an injected notification sink
    pub fn with_notifier(config: GatewayConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let base = config
            .base_url
            .parse::<Url>()
            .map_err(|e| GatewayError::InvalidUrl(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| GatewayError::Build(e.to_string()))?;

        Ok(Self {
            inner,
            base,
            config,
            notifier,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Transport rejection before any usable response body exists
    fn transport_error(&self, source: reqwest::Error) -> GatewayError {
        if let Some(status) = source.status() {
            if let Some(message) = status_message(status) {
                self.notifier.error(message);
                return GatewayError::Status {
                    status,
                    message: message.to_string(),
                };
            }
        }

        let error = GatewayError::Transport(source);
        self.notifier.error(&error.display_message());
        error
    }

    /// Non-success transport status: table message first, then the
    /// response's own text, then the canonical reason
    fn status_error(&self, status: StatusCode, body: &[u8]) -> GatewayError {
        let message = match status_message(status) {
            Some(message) => message.to_string(),
            None => {
                let text = String::from_utf8_lossy(body);
                let text = text.trim();
                if text.is_empty() {
                    status
                        .canonical_reason()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("HTTP {status}"))
                } else {
                    text.to_string()
                }
            }
        };

        self.notifier.error(&message);
        GatewayError::Status { status, message }
    }
}

#[async_trait]
impl GatewayTrait for Gateway {
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
        let url = self
            .base
            .join(path)
            .map_err(|e| GatewayError::InvalidUrl(e.to_string()))?;
        debug!("HTTP {}: {}", method, url);

        let mut request = self.inner.request(method, url);

        if !options.params.is_empty() {
            request = request.query(&options.params);
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }
        if let Some(file) = options.file {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.mime)
                .map_err(|e| GatewayError::Build(e.to_string()))?;
            request = request.multipart(reqwest::multipart::Form::new().part(file.name, part));
        }
        if !options.headers.is_empty() {
            request = request.headers(options.headers.clone());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.transport_error(e)),
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => return Err(self.transport_error(e)),
        };

        // Binary hints skip envelope interpretation on success; transport
        // failures still go through the status table.
        if options.response_type.is_binary() {
            if status.is_success() {
                return Ok(ApiResponse::new(status, headers, body, None));
            }
            return Err(self.status_error(status, &body));
        }

        let json: Option<Value> = serde_json::from_slice(&body).ok();

        match Verdict::classify(status, json.as_ref()) {
            Verdict::Success => Ok(ApiResponse::new(status, headers, body, json)),
            Verdict::BusinessFailure { message } => {
                self.notifier.error(&message);
                Err(GatewayError::Business { message })
            }
            Verdict::ProtocolMismatch => {
                self.notifier.error(PROTOCOL_MISMATCH_MESSAGE);
                Err(GatewayError::ProtocolMismatch)
            }
            Verdict::TransportFailure { status } => Err(self.status_error(status, &body)),
        }
    }
}

/// Create a shared gateway (Arc-wrapped for cloning)
pub fn shared_gateway(config: GatewayConfig) -> Result<Arc<dyn GatewayTrait>> {
    Ok(Arc::new(Gateway::new(config)?))
}
