use leptos::*;

use crate::api::{use_api_client, ApiError, HealthResponse};

/// Reachability of the backend, probed once when the shell mounts. Purely
/// informational; no view blocks on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Reachable,
    Unreachable(String),
}

impl BackendStatus {
    pub fn label(&self) -> String {
        match self {
            BackendStatus::Checking => "checking backend...".to_string(),
            BackendStatus::Reachable => "backend online".to_string(),
            BackendStatus::Unreachable(reason) => format!("backend unreachable: {}", reason),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "bg-surface-muted text-fg-muted border-border",
            BackendStatus::Reachable => {
                "bg-status-success-bg text-status-success-text border-status-success-border"
            }
            BackendStatus::Unreachable(_) => {
                "bg-status-error-bg text-status-error-text border-status-error-border"
            }
        }
    }
}

pub fn status_from_result(result: Option<Result<HealthResponse, ApiError>>) -> BackendStatus {
    match result {
        None => BackendStatus::Checking,
        Some(Ok(resp)) if resp.status == "ok" => BackendStatus::Reachable,
        Some(Ok(resp)) => BackendStatus::Unreachable(format!("unexpected status {:?}", resp.status)),
        Some(Err(err)) => BackendStatus::Unreachable(err.error),
    }
}

pub fn use_backend_status() -> Signal<BackendStatus> {
    let api = use_api_client();
    let resource = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.health().await }
        },
    );
    Signal::derive(move || status_from_result(resource.get()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn status_maps_health_results() {
        assert_eq!(status_from_result(None), BackendStatus::Checking);
        assert_eq!(
            status_from_result(Some(Ok(HealthResponse {
                status: "ok".into()
            }))),
            BackendStatus::Reachable
        );
        assert!(matches!(
            status_from_result(Some(Ok(HealthResponse {
                status: "degraded".into()
            }))),
            BackendStatus::Unreachable(_)
        ));
        assert!(matches!(
            status_from_result(Some(Err(ApiError::request_failed("connection refused")))),
            BackendStatus::Unreachable(reason) if reason.contains("connection refused")
        ));
    }
}
