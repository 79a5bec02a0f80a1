use leptos::*;

use crate::state::health::use_backend_status;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let backend_status = use_backend_status();

    view! {
        <div class="min-h-screen bg-surface">
            <header class="bg-surface-elevated shadow-sm border-b border-border">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <h1 class="text-xl font-semibold text-fg">
                            "Mini Leave Management"
                        </h1>
                        <span
                            class=move || {
                                format!(
                                    "px-3 py-1 rounded-full border text-xs font-medium {}",
                                    backend_status.get().badge_class(),
                                )
                            }
                            title=move || backend_status.get().label()
                        >
                            {move || backend_status.get().label()}
                        </span>
                    </div>
                </div>
            </header>
            <main class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn SectionCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6 space-y-4">
            <h3 class="text-lg font-semibold text-fg">{title}</h3>
            {children()}
        </section>
    }
}
