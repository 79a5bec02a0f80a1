use leptos::*;

use super::repository::ApprovalsRepository;
use crate::api::{use_api_client, ApiError, LeaveDecision, LeaveRecord};
use crate::state::notify::{use_notifier, Notifier};

#[derive(Clone)]
pub struct RejectPayload {
    pub id: String,
    pub reason: String,
}

#[derive(Clone, Copy)]
pub struct ApprovalsViewModel {
    pub pending_resource: Resource<u32, Result<Vec<LeaveRecord>, ApiError>>,
    pub approve_action: Action<String, Result<LeaveDecision, ApiError>>,
    pub reject_action: Action<RejectPayload, Result<LeaveDecision, ApiError>>,
    pub reject_target: RwSignal<Option<String>>,
    pub reject_reason: RwSignal<String>,
    reload: RwSignal<u32>,
}

fn apply_decision_result(
    result: Option<Result<LeaveDecision, ApiError>>,
    notifier: Notifier,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(decision) => notifier.success(decision.message),
            Err(err) => notifier.error(err.error),
        }
        // Exactly one reload per resolved decision, success or failure; the
        // displayed list only changes through this refetch.
        reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl ApprovalsViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let repository = store_value(ApprovalsRepository::new(api));
        let notifier = use_notifier();
        let reload = create_rw_signal(0u32);
        let reject_target = create_rw_signal(None::<String>);
        let reject_reason = create_rw_signal(String::new());

        let pending_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.pending().await }
            },
        );

        let approve_action = create_action(move |id: &String| {
            let repo = repository.get_value();
            let id = id.clone();
            async move { repo.approve(&id).await }
        });

        let reject_action = create_action(move |payload: &RejectPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.reject(&payload.id, &payload.reason).await }
        });

        create_effect(move |_| {
            apply_decision_result(approve_action.value().get(), notifier, reload);
        });

        create_effect(move |_| {
            apply_decision_result(reject_action.value().get(), notifier, reload);
        });

        Self {
            pending_resource,
            approve_action,
            reject_action,
            reject_target,
            reject_reason,
            reload,
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn open_reject(&self, id: String) {
        self.reject_reason.set(String::new());
        self.reject_target.set(Some(id));
    }

    /// Sends whatever reason is currently typed, empty string included.
    pub fn submit_reject(&self, reason: String) {
        if let Some(id) = self.reject_target.get_untracked() {
            self.reject_action.dispatch(RejectPayload { id, reason });
        }
        self.reject_target.set(None);
    }

    pub fn cancel_reject(&self) {
        self.reject_target.set(None);
    }
}

/// Built fresh on every mount; the pending list reloads each time the tab
/// is opened.
pub fn use_approvals_view_model() -> ApprovalsViewModel {
    ApprovalsViewModel::new()
}
