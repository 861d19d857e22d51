//! Gateway configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};

/// Environment variable naming the backend origin.
pub const BACKEND_URL_VAR: &str = "RAGDESK_BACKEND_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_SECS_VAR: &str = "RAGDESK_TIMEOUT_SECS";

/// Gateway configuration
///
/// Fixed at construction time; the gateway never mutates it and exposes no
/// per-call overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Backend base URL all request paths are joined against
    pub base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// Custom user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl GatewayConfig {
    /// Create a config for the given backend origin with default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }

    /// Build configuration from the process environment
    ///
    /// `RAGDESK_BACKEND_URL` is required; `RAGDESK_TIMEOUT_SECS` optionally
    /// overrides the default timeout.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BACKEND_URL_VAR)
            .map_err(|_| GatewayError::Build(format!("{BACKEND_URL_VAR} is not set")))?;

        let mut config = Self::new(base_url);

        if let Ok(raw) = std::env::var(TIMEOUT_SECS_VAR) {
            let secs: u64 = raw
                .parse()
                .map_err(|_| GatewayError::Build(format!("{TIMEOUT_SECS_VAR} is not a number")))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// Default value functions for serde
fn default_timeout() -> Duration {
    // The backend keeps slow RAG queries open for a long time.
    Duration::from_secs(50)
}

fn default_user_agent() -> String {
    format!("RagDesk/{}", env!("CARGO_PKG_VERSION"))
}
