use std::rc::Rc;

use crate::api::{
    ApiClient, ApiError, EmployeeCreated, EmployeePayload, EmployeeRecord, NextIdResponse,
};

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn next_id(&self) -> Result<NextIdResponse, ApiError> {
        self.client.next_employee_id().await
    }

    pub async fn create(&self, payload: EmployeePayload) -> Result<EmployeeCreated, ApiError> {
        self.client.create_employee(&payload).await
    }

    pub async fn roster(&self) -> Result<Vec<EmployeeRecord>, ApiError> {
        self.client.list_employees().await.map(|r| r.employees)
    }
}
