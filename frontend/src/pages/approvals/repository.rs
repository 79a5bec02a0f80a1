use std::rc::Rc;

use crate::api::{ApiClient, ApiError, LeaveDecision, LeaveRecord};

#[derive(Clone)]
pub struct ApprovalsRepository {
    client: Rc<ApiClient>,
}

impl ApprovalsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn pending(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.client.pending_leaves().await.map(|r| r.pending)
    }

    pub async fn approve(&self, id: &str) -> Result<LeaveDecision, ApiError> {
        self.client.approve_leave(id).await
    }

    pub async fn reject(&self, id: &str, reason: &str) -> Result<LeaveDecision, ApiError> {
        self.client.reject_leave(id, reason).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn repository_calls_decision_endpoints() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/leaves/pending");
            then.status(200).json_body(json!({
                "pending": [{
                    "id": "L1",
                    "employee_id": "E3",
                    "start_date": "2025-04-01",
                    "end_date": "2025-04-03",
                    "days": "3"
                }]
            }));
        });
        server.mock(|when, then| {
            when.method(POST)
                .path("/leaves/approve")
                .json_body(json!({"id": "L1"}));
            then.status(200).json_body(json!({"message": "Leave approved"}));
        });
        server.mock(|when, then| {
            when.method(POST)
                .path("/leaves/reject")
                .json_body(json!({"id": "L1", "reason": "overlap"}));
            then.status(200).json_body(json!({"message": "Leave rejected"}));
        });

        let repo = ApprovalsRepository::new(ApiClient::new_with_base_url(server.base_url()));
        let pending = repo.pending().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].days, 3);
        assert_eq!(repo.approve("L1").await.unwrap().message, "Leave approved");
        assert_eq!(
            repo.reject("L1", "overlap").await.unwrap().message,
            "Leave rejected"
        );
    }
}
