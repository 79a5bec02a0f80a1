use leptos::*;

use super::view_model::use_apply_leave_view_model;
use crate::components::{
    forms::{DateField, TextField},
    layout::SectionCard,
};

#[component]
pub fn ApplyLeavePage() -> impl IntoView {
    let vm = use_apply_leave_view_model();
    let form = vm.form;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    view! {
        <SectionCard title="Apply Leave">
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit_action.dispatch(form.to_payload());
                }
            >
                <TextField label="leave id (auto)" value=form.id_signal() readonly=true />
                <TextField label="employee id" value=form.employee_id_signal() placeholder="E001" />
                <DateField label="start date" value=form.start_date_signal() />
                <DateField label="end date" value=form.end_date_signal() />
                <TextField label="reason" value=form.reason_signal() placeholder="Optional reason" />
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                >
                    {move || if pending.get() { "Applying..." } else { "Apply" }}
                </button>
            </form>
        </SectionCard>
    }
}
