//! Backend response envelope and its classification

use std::borrow::Cow;

use reqwest::{header::HeaderMap, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, BUSINESS_FALLBACK_MESSAGE};

/// Business code the backend uses for success.
pub const SUCCESS_CODE: i64 = 200;

/// The backend's uniform response wrapper.
///
/// `data` carries the operation payload and is opaque to the gateway;
/// callers deserialize it themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub status_code: Option<i64>,
    pub status_message: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// Outcome of inspecting one transport response.
///
/// The response pipeline is a four-way decision on (transport status, body
/// shape); keeping it a single enum keeps every branch testable on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Envelope success, or a raw passthrough for enveloped-less bodies on
    /// transport 200 (streaming endpoints reply without a business code)
    Success,
    /// Well-formed envelope reporting a non-success business code
    BusinessFailure { message: String },
    /// JSON body without a business code on a non-success transport status:
    /// the response was not produced by this backend
    ProtocolMismatch,
    /// Non-success transport status with no interpretable body
    TransportFailure { status: StatusCode },
}

impl Verdict {
    /// Classify a response from its transport status and parsed body.
    ///
    /// `body` is `None` when the payload is not JSON at all.
    pub fn classify(status: StatusCode, body: Option<&Value>) -> Self {
        let code = body
            .and_then(|value| value.get("status_code"))
            .and_then(Value::as_i64);

        match code {
            Some(SUCCESS_CODE) => Verdict::Success,
            Some(_) => {
                let message = body
                    .and_then(|value| value.get("status_message"))
                    .and_then(Value::as_str)
                    .unwrap_or(BUSINESS_FALLBACK_MESSAGE)
                    .to_string();
                Verdict::BusinessFailure { message }
            }
            None if status == StatusCode::OK => Verdict::Success,
            None if body.is_some() => Verdict::ProtocolMismatch,
            None => Verdict::TransportFailure { status },
        }
    }
}

/// A resolved response: transport status, headers, and the unstripped body.
///
/// The gateway never unwraps `data` for the caller; `data()` and
/// `data_as()` are conveniences over the full body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    json: Option<Value>,
}

impl ApiResponse {
    /// Assemble a response; public so mock gateways can fabricate one
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
        json: Option<Value>,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            json,
        }
    }

    /// Transport-level HTTP status
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes (binary responses, raw passthrough)
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, lossy on invalid UTF-8
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Full parsed body, `None` for non-JSON payloads
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// Typed view of the envelope fields
    pub fn envelope(&self) -> Option<Envelope> {
        let value = self.json.clone()?;
        serde_json::from_value(value).ok()
    }

    /// The envelope's `data` field
    pub fn data(&self) -> Option<&Value> {
        self.json.as_ref().and_then(|value| value.get("data"))
    }

    /// Deserialize the envelope's `data` field into a concrete type
    pub fn data_as<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        let data = self.data().cloned().unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }
}
