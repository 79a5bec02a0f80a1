use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal that collects one line of text. Replaces the blocking `prompt()`
/// of the original UI: submitting fires `on_submit` with the typed value
/// (empty string allowed), dismissing fires `on_cancel` and submits nothing.
#[component]
pub fn PromptDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    #[prop(into)] value: RwSignal<String>,
    on_submit: Callback<String>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] submit_label: MaybeSignal<String>,
) -> impl IntoView {
    let submit_label_text = Signal::derive(move || {
        let text = submit_label.get();
        if text.trim().is_empty() {
            "Submit".to_string()
        } else {
            text
        }
    });
    let title_text = Signal::derive(move || title.get());
    let message_text = Signal::derive(move || message.get());

    let cancel_on_backdrop = on_cancel;
    let cancel_on_esc = on_cancel;
    let cancel_on_footer = on_cancel;
    let submit_on_footer = on_submit;
    let submit_on_enter = on_submit;

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| cancel_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel_on_esc.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title_text.get()}</h2>
                    <p class="text-sm text-fg-muted">{move || message_text.get()}</p>
                    <input
                        type="text"
                        class="appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm"
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit_on_enter.call(value.get_untracked());
                            }
                        }
                    />
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| cancel_on_footer.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                            on:click=move |_| submit_on_footer.call(value.get_untracked())
                        >
                            {move || submit_label_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
