#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use leptos::*;

    use crate::api::ApiClient;
    use crate::state::notify;

    /// Provides the contexts the application root normally provides. The
    /// client points at a closed port; rendering never issues requests
    /// because resource loading is suppressed.
    pub fn provide_app_context() -> notify::Notifier {
        provide_context(ApiClient::new_with_base_url("http://127.0.0.1:9"));
        notify::provide_notifier()
    }
}
