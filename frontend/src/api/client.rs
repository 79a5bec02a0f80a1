use leptos::*;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{api::types::*, config};

/// Thin wrapper over the backend REST contract. One instance is provided via
/// context at the application root so the base URL is threaded explicitly
/// instead of read ambiently at call sites; tests construct their own with
/// [`ApiClient::new_with_base_url`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(format!("{}{}", base_url, path))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::decode(response).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{}{}", base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
        } else {
            let error = match response.json::<serde_json::Value>().await {
                Ok(body) => surface_message(&body)
                    .map(ApiError::backend)
                    .unwrap_or_else(|| {
                        ApiError::backend(format!("Request failed with status {}", status))
                    }),
                Err(e) => ApiError::parse(format!("Failed to parse error: {}", e)),
            };
            log::error!("backend call failed: {}", error.error);
            Err(error)
        }
    }

    pub async fn next_employee_id(&self) -> Result<NextIdResponse, ApiError> {
        self.get_json("/employees/next-id").await
    }

    pub async fn create_employee(
        &self,
        payload: &EmployeePayload,
    ) -> Result<EmployeeCreated, ApiError> {
        self.post_json("/employees", payload).await
    }

    pub async fn list_employees(&self) -> Result<EmployeesResponse, ApiError> {
        self.get_json("/employees").await
    }

    pub async fn next_leave_id(&self) -> Result<NextIdResponse, ApiError> {
        self.get_json("/leaves/next-id").await
    }

    pub async fn apply_leave(&self, payload: &LeavePayload) -> Result<LeaveApplied, ApiError> {
        self.post_json("/leaves/apply", payload).await
    }

    pub async fn pending_leaves(&self) -> Result<PendingLeavesResponse, ApiError> {
        self.get_json("/leaves/pending").await
    }

    pub async fn approve_leave(&self, id: &str) -> Result<LeaveDecision, ApiError> {
        let payload = DecisionPayload {
            id: id.to_string(),
            reason: None,
        };
        self.post_json("/leaves/approve", &payload).await
    }

    pub async fn reject_leave(&self, id: &str, reason: &str) -> Result<LeaveDecision, ApiError> {
        let payload = DecisionPayload {
            id: id.to_string(),
            reason: Some(reason.to_string()),
        };
        self.post_json("/leaves/reject", &payload).await
    }

    pub async fn employee_balance(&self, employee_id: &str) -> Result<BalanceResponse, ApiError> {
        self.get_json(&format!("/employees/{}/balance", employee_id))
            .await
    }

    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get_json("/health").await
    }
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}
