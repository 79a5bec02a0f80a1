use leptos::*;

use super::view_model::use_add_employee_view_model;
use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    forms::{DateField, TextField},
    layout::SectionCard,
};

#[component]
pub fn AddEmployeePage() -> impl IntoView {
    let vm = use_add_employee_view_model();
    let form = vm.form;
    let submit_action = vm.submit_action;
    let roster_resource = vm.roster_resource;

    let pending = submit_action.pending();
    let roster_loading = roster_resource.loading();
    let roster_error = Signal::derive(move || roster_resource.get().and_then(|result| result.err()));
    let roster = Signal::derive(move || {
        roster_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <SectionCard title="Add Employee">
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit_action.dispatch(form.to_payload());
                    }
                >
                    <TextField label="id (auto)" value=form.id_signal() readonly=true />
                    <TextField label="name" value=form.name_signal() placeholder="Full name" />
                    <TextField label="email" value=form.email_signal() placeholder="name@company.com" />
                    <TextField label="department" value=form.department_signal() placeholder="Department" />
                    <DateField label="joining date" value=form.joining_date_signal() />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Adding..." } else { "Add" }}
                    </button>
                </form>
            </SectionCard>

            <SectionCard title="Current Employees">
                <Show when=move || roster_loading.get()>
                    <p class="text-sm text-fg-muted">"Loading roster..."</p>
                </Show>
                <InlineErrorMessage error=roster_error />
                {move || {
                    let employees = roster.get();
                    if employees.is_empty() && !roster_loading.get() && roster_error.get().is_none() {
                        view! {
                            <EmptyState
                                title="No employees yet"
                                description="Employees appear here once the backend stores them."
                            />
                        }
                            .into_view()
                    } else {
                        view! {
                            <ul class="divide-y divide-border">
                                {employees
                                    .into_iter()
                                    .map(|employee| {
                                        view! {
                                            <li class="py-2 flex items-center justify-between text-sm">
                                                <span class="font-medium text-fg">
                                                    {employee.id.clone()} " · " {employee.name.clone()}
                                                </span>
                                                <span class="text-fg-muted">
                                                    {employee.department.clone()}
                                                    {employee
                                                        .leave_balance
                                                        .as_ref()
                                                        .map(|balance| format!(" · {} days left", balance))
                                                        .unwrap_or_default()}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_view()
                    }
                }}
            </SectionCard>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_app_context, ssr::render_to_string};

    #[test]
    fn renders_form_fields_and_roster_section() {
        let html = render_to_string(move || {
            provide_app_context();
            view! { <AddEmployeePage/> }
        });
        assert!(html.contains("Add Employee"));
        assert!(html.contains("id (auto)"));
        assert!(html.contains("joining date"));
        assert!(html.contains("Current Employees"));
    }
}
