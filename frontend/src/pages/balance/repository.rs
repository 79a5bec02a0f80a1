use std::rc::Rc;

use crate::api::{ApiClient, ApiError, BalanceResponse};

#[derive(Clone)]
pub struct BalanceRepository {
    client: Rc<ApiClient>,
}

impl BalanceRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// One lookup per call; nothing is cached between invocations.
    pub async fn lookup(&self, employee_id: &str) -> Result<BalanceResponse, ApiError> {
        self.client.employee_balance(employee_id).await
    }
}
