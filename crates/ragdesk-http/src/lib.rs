//! HTTP gateway for the RagDesk backend
//!
//! Wraps a reqwest client with the request/response pipeline that
//! normalizes the backend's `{status_code, status_message, data}` envelope
//! into a resolved [`ApiResponse`] or a [`GatewayError`].
//!
//! ## Features
//!
//! - **Trait-based design**: Mockable via `GatewayTrait`
//! - **Uniform failure contract**: business, protocol-mismatch and
//!   transport failures all surface as `GatewayError` with a display message
//! - **Injected notifications**: every rejection emits exactly one message
//!   through a caller-supplied [`Notifier`] before the error is returned
//! - **Binary passthrough**: blob/arraybuffer requests skip envelope logic
//! - **Testing support**: Easy mocking with wiremock

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod notify;

pub use client::{shared_gateway, FilePart, Gateway, GatewayTrait, RequestOptions, ResponseType};
pub use config::GatewayConfig;
pub use envelope::{ApiResponse, Envelope, Verdict};
pub use error::{GatewayError, Result};
pub use notify::{MemoryNotifier, Notifier, TracingNotifier};

/// Re-export commonly used types
pub use reqwest::{header, Method, StatusCode};
