use leptos::*;

use crate::api::EmployeePayload;

/// Signal-backed form state for the add-employee view. The id is only ever
/// written from server responses; every other field mirrors its input.
#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    id: RwSignal<String>,
    name: RwSignal<String>,
    email: RwSignal<String>,
    department: RwSignal<String>,
    joining_date: RwSignal<String>,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self {
            id: create_rw_signal(String::new()),
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
            joining_date: create_rw_signal(String::new()),
        }
    }
}

impl EmployeeFormState {
    pub fn id_signal(&self) -> RwSignal<String> {
        self.id
    }

    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn department_signal(&self) -> RwSignal<String> {
        self.department
    }

    pub fn joining_date_signal(&self) -> RwSignal<String> {
        self.joining_date
    }

    pub fn set_assigned_id(&self, id: impl Into<String>) {
        self.id.set(id.into());
    }

    /// Fields are forwarded exactly as typed; validation stays server-side.
    pub fn to_payload(self) -> EmployeePayload {
        EmployeePayload {
            id: self.id.get_untracked(),
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            department: self.department.get_untracked(),
            joining_date: self.joining_date.get_untracked(),
        }
    }
}
