use leptos::*;

use super::{repository::EmployeesRepository, utils::EmployeeFormState};
use crate::api::{
    use_api_client, ApiError, EmployeeCreated, EmployeePayload, EmployeeRecord, NextIdResponse,
};
use crate::state::notify::{use_notifier, Notifier};

#[derive(Clone, Copy)]
pub struct AddEmployeeViewModel {
    pub form: EmployeeFormState,
    pub submit_action: Action<EmployeePayload, Result<EmployeeCreated, ApiError>>,
    pub next_id_resource: Resource<(), Result<NextIdResponse, ApiError>>,
    pub roster_resource: Resource<u32, Result<Vec<EmployeeRecord>, ApiError>>,
}

fn apply_next_id(result: Option<Result<NextIdResponse, ApiError>>, form: EmployeeFormState) {
    if let Some(Ok(next)) = result {
        form.set_assigned_id(next.next_id);
    }
}

fn apply_submit_result(
    result: Option<Result<EmployeeCreated, ApiError>>,
    form: EmployeeFormState,
    notifier: Notifier,
    roster_reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(created) => {
                notifier.success(created.message);
                if let Some(employee) = created.employee {
                    if !employee.id.is_empty() {
                        form.set_assigned_id(employee.id);
                    }
                }
                roster_reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => notifier.error(err.error),
        }
    }
}

impl AddEmployeeViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let repository = store_value(EmployeesRepository::new(api));
        let notifier = use_notifier();
        let form = EmployeeFormState::default();
        let roster_reload = create_rw_signal(0u32);

        let next_id_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { repo.next_id().await }
            },
        );

        let roster_resource = create_resource(
            move || roster_reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.roster().await }
            },
        );

        let submit_action = create_action(move |payload: &EmployeePayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.create(payload).await }
        });

        create_effect(move |_| {
            apply_next_id(next_id_resource.get(), form);
        });

        create_effect(move |_| {
            apply_submit_result(submit_action.value().get(), form, notifier, roster_reload);
        });

        Self {
            form,
            submit_action,
            next_id_resource,
            roster_resource,
        }
    }
}

/// Built fresh on every mount: leaving the tab drops all form state.
pub fn use_add_employee_view_model() -> AddEmployeeViewModel {
    AddEmployeeViewModel::new()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::EmployeeRecord;
    use crate::state::notify::ToastKind;
    use crate::test_support::ssr::with_runtime;

    fn employee(id: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: id.into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            department: "Platform".into(),
            joining_date: "2025-03-01".into(),
            leave_balance: Some("24".into()),
        }
    }

    #[test]
    fn suggested_id_populates_the_form() {
        with_runtime(|| {
            let form = EmployeeFormState::default();
            apply_next_id(
                Some(Ok(NextIdResponse {
                    next_id: "E3".into(),
                })),
                form,
            );
            assert_eq!(form.id_signal().get_untracked(), "E3");
        });
    }

    #[test]
    fn failed_suggestion_leaves_the_form_untouched() {
        with_runtime(|| {
            let form = EmployeeFormState::default();
            apply_next_id(Some(Err(ApiError::request_failed("offline"))), form);
            assert_eq!(form.id_signal().get_untracked(), "");
        });
    }

    #[test]
    fn successful_creation_adopts_assigned_id_and_reloads_roster() {
        with_runtime(|| {
            let form = EmployeeFormState::default();
            let notifier = Notifier::new();
            let reload = create_rw_signal(0u32);

            apply_submit_result(
                Some(Ok(EmployeeCreated {
                    message: "Employee created".into(),
                    employee: Some(employee("E7")),
                })),
                form,
                notifier,
                reload,
            );

            assert_eq!(form.id_signal().get_untracked(), "E7");
            assert_eq!(reload.get_untracked(), 1);
            let toasts = notifier.toasts().get_untracked();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].kind, ToastKind::Success);
            assert_eq!(toasts[0].text, "Employee created");
        });
    }

    #[test]
    fn response_without_employee_keeps_current_id() {
        with_runtime(|| {
            let form = EmployeeFormState::default();
            form.set_assigned_id("E3");
            let notifier = Notifier::new();
            let reload = create_rw_signal(0u32);

            apply_submit_result(
                Some(Ok(EmployeeCreated {
                    message: "Employee created".into(),
                    employee: None,
                })),
                form,
                notifier,
                reload,
            );

            assert_eq!(form.id_signal().get_untracked(), "E3");
        });
    }

    #[test]
    fn failed_creation_surfaces_error_and_keeps_id() {
        with_runtime(|| {
            let form = EmployeeFormState::default();
            form.set_assigned_id("E3");
            let notifier = Notifier::new();
            let reload = create_rw_signal(0u32);

            apply_submit_result(
                Some(Err(ApiError::backend("Email already exists"))),
                form,
                notifier,
                reload,
            );

            assert_eq!(form.id_signal().get_untracked(), "E3");
            assert_eq!(reload.get_untracked(), 0);
            let toasts = notifier.toasts().get_untracked();
            assert_eq!(toasts[0].kind, ToastKind::Error);
            assert_eq!(toasts[0].text, "Email already exists");
        });
    }
}
