use leptos::*;

use crate::{
    api::ApiClient,
    components::{layout::AppShell, toast::ToastHost},
    pages::{AddEmployeePage, ApplyLeavePage, ApprovalsPage, BalancePage},
    state::notify,
};

/// The only piece of application-level state. Exactly one view is mounted
/// per tab; switching unmounts the previous view and its form state with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Employees,
    Apply,
    Approvals,
    Balance,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Employees, Tab::Apply, Tab::Approvals, Tab::Balance];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Employees => "Add Employee",
            Tab::Apply => "Apply Leave",
            Tab::Approvals => "Approvals",
            Tab::Balance => "Balance",
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Employees
    }
}

fn tab_button_class(selected: bool) -> String {
    let base = "px-3 py-2 rounded-md text-sm font-medium";
    if selected {
        format!("{} bg-action-primary-bg text-action-primary-text", base)
    } else {
        format!(
            "{} text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
            base
        )
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    notify::provide_notifier();
    view! { <App/> }
}

#[component]
pub fn App() -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(Tab::default());

    view! {
        <>
            <AppShell>
                <nav class="flex gap-2 border-b border-border pb-4">
                    {Tab::ALL
                        .iter()
                        .copied()
                        .map(|tab| {
                            view! {
                                <button
                                    type="button"
                                    class=move || tab_button_class(active_tab.get() == tab)
                                    on:click=move |_| set_active_tab.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <ActivePanel active_tab=active_tab />
            </AppShell>
            <ToastHost/>
        </>
    }
}

#[component]
fn ActivePanel(active_tab: ReadSignal<Tab>) -> impl IntoView {
    move || match active_tab.get() {
        Tab::Employees => view! { <AddEmployeePage/> }.into_view(),
        Tab::Apply => view! { <ApplyLeavePage/> }.into_view(),
        Tab::Approvals => view! { <ApprovalsPage/> }.into_view(),
        Tab::Balance => view! { <BalancePage/> }.into_view(),
    }
}
