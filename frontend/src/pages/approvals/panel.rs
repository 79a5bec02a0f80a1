use leptos::*;

use super::{types::rows_from_pending, view_model::use_approvals_view_model};
use crate::components::{
    dialog::PromptDialog, empty_state::EmptyState, error::InlineErrorMessage, layout::SectionCard,
};

#[component]
pub fn ApprovalsPage() -> impl IntoView {
    let vm = use_approvals_view_model();
    let pending_resource = vm.pending_resource;
    let approve_action = vm.approve_action;
    let reject_reason = vm.reject_reason;
    let reject_target = vm.reject_target;

    let loading = pending_resource.loading();
    let list_error = Signal::derive(move || pending_resource.get().and_then(|result| result.err()));
    let rows = Signal::derive(move || {
        pending_resource
            .get()
            .and_then(|result| result.ok())
            .map(|pending| rows_from_pending(&pending))
            .unwrap_or_default()
    });

    let dialog_open = Signal::derive(move || reject_target.get().is_some());
    let dialog_message = Signal::derive(move || {
        reject_target
            .get()
            .map(|id| format!("Reason for rejecting {}?", id))
            .unwrap_or_default()
    });

    view! {
        <>
            <SectionCard title="Pending Approvals">
                <div class="flex justify-end">
                    <button
                        type="button"
                        class="px-3 py-1.5 rounded-md text-sm font-medium text-fg bg-surface-muted hover:bg-surface-elevated border border-border"
                        on:click=move |_| vm.refresh()
                    >
                        "Refresh"
                    </button>
                </div>
                <Show when=move || loading.get()>
                    <p class="text-sm text-fg-muted">"Loading pending requests..."</p>
                </Show>
                <InlineErrorMessage error=list_error />
                {move || {
                    let rows = rows.get();
                    if rows.is_empty() && !loading.get() && list_error.get().is_none() {
                        view! {
                            <EmptyState
                                title="Nothing waiting for a decision"
                                description="Applications show up here while they are pending."
                            />
                        }
                            .into_view()
                    } else {
                        view! {
                            <ul class="divide-y divide-border">
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        let approve_id = row.id.clone();
                                        let reject_id = row.id.clone();
                                        view! {
                                            <li class="py-3 flex items-center justify-between gap-4">
                                                <div class="text-sm">
                                                    <p class="font-medium text-fg">
                                                        {row.id.clone()} " · Emp: " {row.employee_id.clone()}
                                                    </p>
                                                    <p class="text-fg-muted">
                                                        {row.date_range.clone()} " · " {row.days_label.clone()}
                                                        {row
                                                            .reason
                                                            .as_ref()
                                                            .map(|reason| format!(" · {}", reason))
                                                            .unwrap_or_default()}
                                                    </p>
                                                </div>
                                                <div class="flex gap-2">
                                                    <button
                                                        type="button"
                                                        class="px-3 py-1.5 rounded-md text-sm font-semibold text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                                                        on:click=move |_| approve_action.dispatch(approve_id.clone())
                                                    >
                                                        "Approve"
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class="px-3 py-1.5 rounded-md text-sm font-semibold text-action-danger-text bg-action-danger-bg hover:bg-action-danger-bg-hover"
                                                        on:click=move |_| vm.open_reject(reject_id.clone())
                                                    >
                                                        "Reject"
                                                    </button>
                                                </div>
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
            <PromptDialog
                is_open=dialog_open
                title="Reject leave"
                message=dialog_message
                value=reject_reason
                submit_label="Reject"
                on_submit=Callback::new(move |reason| vm.submit_reject(reason))
                on_cancel=Callback::new(move |_| vm.cancel_reject())
            />
        </>
    }
}
