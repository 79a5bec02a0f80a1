use leptos::*;

use crate::state::notify::{use_notifier, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = notifier.toasts();

    view! {
        <div class="fixed bottom-4 right-4 z-[80] flex flex-col gap-2 w-80">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let (palette, icon) = match toast.kind {
                            ToastKind::Success => (
                                "bg-status-success-bg border-status-success-border text-status-success-text",
                                "fa-check-circle",
                            ),
                            ToastKind::Error => (
                                "bg-status-error-bg border-status-error-border text-status-error-text",
                                "fa-exclamation-circle",
                            ),
                        };
                        let id = toast.id;
                        view! {
                            <div
                                class=format!(
                                    "flex items-start gap-2 p-3 rounded-xl border shadow-lg animate-pop-in {}",
                                    palette,
                                )
                                role="status"
                            >
                                <i class=format!("fas {} mt-0.5", icon)></i>
                                <p class="text-sm font-medium flex-1">{toast.text.clone()}</p>
                                <button
                                    type="button"
                                    aria-label="Dismiss"
                                    class="opacity-70 hover:opacity-100"
                                    on:click=move |_| notifier.dismiss(id)
                                >
                                    {"✕"}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
