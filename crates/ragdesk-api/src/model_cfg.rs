//! Model configuration endpoints (`/sys/model_setting_cfg/*`,
//! `/sys/model_available_cfg/*`)

use std::sync::Arc;

use ragdesk_http::{ApiResponse, GatewayTrait, RequestOptions, Result};

use crate::models::{AvailableModelAdd, ModelCfgCreate, SetDefaultModelCfg};

/// Client for provider/model configuration
pub struct ModelCfgApi {
    gateway: Arc<dyn GatewayTrait>,
}

impl ModelCfgApi {
    pub fn new(gateway: Arc<dyn GatewayTrait>) -> Self {
        Self { gateway }
    }

    /// Fetch the default model configuration
    pub async fn default_cfg(&self) -> Result<ApiResponse> {
        self.gateway
            .get("/sys/model_setting_cfg/default", RequestOptions::new())
            .await
    }

    /// List supported providers
    pub async fn list_providers(&self) -> Result<ApiResponse> {
        self.gateway
            .get("/sys/model_setting_cfg/providers", RequestOptions::new())
            .await
    }

    /// Register a provider configuration
    pub async fn create(&self, payload: ModelCfgCreate) -> Result<ApiResponse> {
        let body = serde_json::to_value(&payload)?;
        self.gateway
            .post(
                "/sys/model_setting_cfg/create",
                RequestOptions::new().with_json(body),
            )
            .await
    }

    /// Remove a provider configuration by id
    pub async fn delete(&self, id: &str) -> Result<ApiResponse> {
        self.gateway
            .post(
                "/sys/model_setting_cfg/delete",
                RequestOptions::new().with_param("id", id),
            )
            .await
    }

    /// List all provider configurations
    pub async fn list(&self) -> Result<ApiResponse> {
        self.gateway
            .get("/sys/model_setting_cfg/list", RequestOptions::new())
            .await
    }

    /// List the models registered under one provider configuration
    pub async fn available_list(&self, id: &str) -> Result<ApiResponse> {
        self.gateway
            .get(
                "/sys/model_setting_cfg/available_list",
                RequestOptions::new().with_param("id", id),
            )
            .await
    }

    /// Select the default LLM and embedding models
    pub async fn set_default(&self, payload: SetDefaultModelCfg) -> Result<ApiResponse> {
        let body = serde_json::to_value(&payload)?;
        self.gateway
            .post(
                "/sys/model_setting_cfg/setting",
                RequestOptions::new().with_json(body),
            )
            .await
    }

    /// Register a model under a provider configuration
    pub async fn add_available(&self, payload: AvailableModelAdd) -> Result<ApiResponse> {
        let body = serde_json::to_value(&payload)?;
        self.gateway
            .post(
                "/sys/model_available_cfg/add",
                RequestOptions::new().with_json(body),
            )
            .await
    }

    /// List every registered model
    pub async fn list_available(&self) -> Result<ApiResponse> {
        self.gateway
            .get("/sys/model_available_cfg/list", RequestOptions::new())
            .await
    }

    /// Remove a registered model by id
    pub async fn delete_available(&self, id: &str) -> Result<ApiResponse> {
        self.gateway
            .post(
                "/sys/model_available_cfg/delete",
                RequestOptions::new().with_param("id", id),
            )
            .await
    }
}
