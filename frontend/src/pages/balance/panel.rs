use leptos::*;

use super::view_model::{outcome_text, use_balance_view_model};
use crate::components::{forms::TextField, layout::SectionCard};

#[component]
pub fn BalancePage() -> impl IntoView {
    let vm = use_balance_view_model();
    let employee_id = vm.employee_id;
    let outcome = vm.outcome;
    let lookup_action = vm.lookup_action;
    let pending = lookup_action.pending();

    view! {
        <SectionCard title="Check Balance">
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    lookup_action.dispatch(employee_id.get_untracked());
                }
            >
                <TextField label="employee id" value=employee_id placeholder="E001" />
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                >
                    {move || if pending.get() { "Fetching..." } else { "Fetch" }}
                </button>
            </form>
            {move || {
                outcome
                    .get()
                    .map(|outcome| {
                        view! {
                            <div class="p-3 rounded-md bg-surface-muted border border-border text-sm font-medium text-fg">
                                {outcome_text(&outcome)}
                            </div>
                        }
                    })
            }}
        </SectionCard>
    }
}
