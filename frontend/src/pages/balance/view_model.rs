use leptos::*;

use super::repository::BalanceRepository;
use crate::api::{use_api_client, ApiError, BalanceResponse};

/// What the view shows after a lookup: the day count, or the backend's
/// error text verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BalanceOutcome {
    Balance(i64),
    Message(String),
}

pub fn outcome_text(outcome: &BalanceOutcome) -> String {
    match outcome {
        BalanceOutcome::Balance(days) => format!("Balance: {}", days),
        BalanceOutcome::Message(detail) => detail.clone(),
    }
}

fn apply_lookup_result(
    result: Option<Result<BalanceResponse, ApiError>>,
    outcome: RwSignal<Option<BalanceOutcome>>,
) {
    if let Some(result) = result {
        match result {
            Ok(resp) => outcome.set(Some(BalanceOutcome::Balance(resp.balance))),
            Err(err) => outcome.set(Some(BalanceOutcome::Message(err.error))),
        }
    }
}

#[derive(Clone, Copy)]
pub struct BalanceViewModel {
    pub employee_id: RwSignal<String>,
    pub outcome: RwSignal<Option<BalanceOutcome>>,
    pub lookup_action: Action<String, Result<BalanceResponse, ApiError>>,
}

impl BalanceViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let repository = store_value(BalanceRepository::new(api));
        let employee_id = create_rw_signal(String::new());
        let outcome = create_rw_signal(None::<BalanceOutcome>);

        let lookup_action = create_action(move |id: &String| {
            let repo = repository.get_value();
            let id = id.clone();
            async move { repo.lookup(&id).await }
        });

        create_effect(move |_| {
            apply_lookup_result(lookup_action.value().get(), outcome);
        });

        Self {
            employee_id,
            outcome,
            lookup_action,
        }
    }
}

/// Built fresh on every mount; no result survives a tab switch.
pub fn use_balance_view_model() -> BalanceViewModel {
    BalanceViewModel::new()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn nothing_is_shown_before_the_first_lookup() {
        with_runtime(|| {
            let outcome = create_rw_signal(None::<BalanceOutcome>);
            apply_lookup_result(None, outcome);
            assert!(outcome.get_untracked().is_none());
        });
    }

    #[test]
    fn successful_lookup_shows_the_day_count() {
        with_runtime(|| {
            let outcome = create_rw_signal(None::<BalanceOutcome>);
            apply_lookup_result(
                Some(Ok(BalanceResponse {
                    employee_id: "E3".into(),
                    balance: 12,
                })),
                outcome,
            );
            let outcome = outcome.get_untracked().unwrap();
            assert_eq!(outcome, BalanceOutcome::Balance(12));
            assert_eq!(outcome_text(&outcome), "Balance: 12");
        });
    }

    #[test]
    fn failed_lookup_shows_the_detail_verbatim() {
        with_runtime(|| {
            let outcome = create_rw_signal(None::<BalanceOutcome>);
            apply_lookup_result(
                Some(Err(ApiError::backend("Employee not found"))),
                outcome,
            );
            let outcome = outcome.get_untracked().unwrap();
            assert_eq!(outcome_text(&outcome), "Employee not found");
        });
    }

    #[test]
    fn later_lookups_replace_earlier_outcomes() {
        with_runtime(|| {
            let outcome = create_rw_signal(None::<BalanceOutcome>);
            apply_lookup_result(
                Some(Err(ApiError::backend("Employee not found"))),
                outcome,
            );
            apply_lookup_result(
                Some(Ok(BalanceResponse {
                    employee_id: "E3".into(),
                    balance: 7,
                })),
                outcome,
            );
            assert_eq!(outcome.get_untracked(), Some(BalanceOutcome::Balance(7)));
        });
    }
}
