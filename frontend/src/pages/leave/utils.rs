use leptos::*;

use crate::api::LeavePayload;

/// Signal-backed form state for the leave application view. Dates stay
/// strings end to end; the backend decides what parses and what overlaps.
#[derive(Clone, Copy)]
pub struct LeaveFormState {
    id: RwSignal<String>,
    employee_id: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            id: create_rw_signal(String::new()),
            employee_id: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn id_signal(&self) -> RwSignal<String> {
        self.id
    }

    pub fn employee_id_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn start_date_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_date_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn set_assigned_id(&self, id: impl Into<String>) {
        self.id.set(id.into());
    }

    pub fn to_payload(self) -> LeavePayload {
        LeavePayload {
            id: self.id.get_untracked(),
            employee_id: self.employee_id.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            reason: self.reason.get_untracked(),
        }
    }
}
