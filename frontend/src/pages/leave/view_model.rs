use leptos::*;

use super::{repository::LeaveRepository, utils::LeaveFormState};
use crate::api::{use_api_client, ApiError, LeaveApplied, LeavePayload, NextIdResponse};
use crate::state::notify::{use_notifier, Notifier};

#[derive(Clone, Copy)]
pub struct ApplyLeaveViewModel {
    pub form: LeaveFormState,
    pub submit_action: Action<LeavePayload, Result<LeaveApplied, ApiError>>,
    pub next_id_resource: Resource<(), Result<NextIdResponse, ApiError>>,
}

fn apply_next_id(result: Option<Result<NextIdResponse, ApiError>>, form: LeaveFormState) {
    if let Some(Ok(next)) = result {
        form.set_assigned_id(next.next_id);
    }
}

fn apply_submit_result(
    result: Option<Result<LeaveApplied, ApiError>>,
    form: LeaveFormState,
    notifier: Notifier,
) {
    if let Some(result) = result {
        match result {
            Ok(applied) => {
                notifier.success(applied.message);
                if let Some(leave) = applied.leave {
                    if !leave.id.is_empty() {
                        form.set_assigned_id(leave.id);
                    }
                }
            }
            Err(err) => notifier.error(err.error),
        }
    }
}

impl ApplyLeaveViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let repository = store_value(LeaveRepository::new(api));
        let notifier = use_notifier();
        let form = LeaveFormState::default();

        let next_id_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { repo.next_id().await }
            },
        );

        let submit_action = create_action(move |payload: &LeavePayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.apply(payload).await }
        });

        create_effect(move |_| {
            apply_next_id(next_id_resource.get(), form);
        });

        create_effect(move |_| {
            apply_submit_result(submit_action.value().get(), form, notifier);
        });

        Self {
            form,
            submit_action,
            next_id_resource,
        }
    }
}

/// Built fresh on every mount: leaving the tab drops all form state.
pub fn use_apply_leave_view_model() -> ApplyLeaveViewModel {
    ApplyLeaveViewModel::new()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::LeaveRecord;
    use crate::state::notify::ToastKind;
    use crate::test_support::ssr::with_runtime;

    fn leave(id: &str) -> LeaveRecord {
        LeaveRecord {
            id: id.into(),
            employee_id: "E3".into(),
            start_date: "2025-04-01".into(),
            end_date: "2025-04-03".into(),
            days: 3,
            status: Some("PENDING".into()),
            reason: None,
            applied_at: None,
        }
    }

    #[test]
    fn suggested_id_populates_the_form() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            apply_next_id(
                Some(Ok(NextIdResponse {
                    next_id: "L001".into(),
                })),
                form,
            );
            assert_eq!(form.id_signal().get_untracked(), "L001");
        });
    }

    #[test]
    fn successful_application_adopts_assigned_id() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            let notifier = Notifier::new();

            apply_submit_result(
                Some(Ok(LeaveApplied {
                    message: "Leave applied".into(),
                    leave: Some(leave("L017")),
                })),
                form,
                notifier,
            );

            assert_eq!(form.id_signal().get_untracked(), "L017");
            let toasts = notifier.toasts().get_untracked();
            assert_eq!(toasts[0].kind, ToastKind::Success);
            assert_eq!(toasts[0].text, "Leave applied");
        });
    }

    #[test]
    fn failed_application_keeps_id_and_surfaces_detail() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            form.set_assigned_id("L001");
            let notifier = Notifier::new();

            apply_submit_result(
                Some(Err(ApiError::backend("Requested days exceed available balance"))),
                form,
                notifier,
            );

            assert_eq!(form.id_signal().get_untracked(), "L001");
            let toasts = notifier.toasts().get_untracked();
            assert_eq!(toasts[0].kind, ToastKind::Error);
            assert_eq!(toasts[0].text, "Requested days exceed available balance");
        });
    }
}
