use std::rc::Rc;

use crate::api::{ApiClient, ApiError, LeaveApplied, LeavePayload, NextIdResponse};

#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl LeaveRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn next_id(&self) -> Result<NextIdResponse, ApiError> {
        self.client.next_leave_id().await
    }

    pub async fn apply(&self, payload: LeavePayload) -> Result<LeaveApplied, ApiError> {
        self.client.apply_leave(&payload).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn repository_calls_leave_endpoints() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/leaves/next-id");
            then.status(200).json_body(json!({"next_id": "L001"}));
        });
        server.mock(|when, then| {
            when.method(POST).path("/leaves/apply");
            then.status(400)
                .json_body(json!({"detail": "Overlapping leave request exists"}));
        });

        let repo = LeaveRepository::new(ApiClient::new_with_base_url(server.base_url()));
        assert_eq!(repo.next_id().await.unwrap().next_id, "L001");
        let err = repo
            .apply(LeavePayload {
                id: "L001".into(),
                employee_id: "E1".into(),
                start_date: "2025-04-01".into(),
                end_date: "2025-04-02".into(),
                reason: String::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.error, "Overlapping leave request exists");
    }
}
