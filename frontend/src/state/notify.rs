use leptos::*;

#[cfg(target_arch = "wasm32")]
const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Queue of transient notifications shown by `ToastHost`. Replaces the
/// blocking `alert()` calls of the original UI; pushes never block the
/// interface and time out on their own in the browser.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, text }));

        #[cfg(target_arch = "wasm32")]
        {
            let toasts = self.toasts;
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
                toasts.update(|current| current.retain(|t| t.id != id));
            });
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifier() -> Notifier {
    if let Some(existing) = use_context::<Notifier>() {
        return existing;
    }
    let notifier = Notifier::new();
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(Notifier::new)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn pushes_keep_insertion_order_and_distinct_ids() {
        with_runtime(|| {
            let notifier = Notifier::new();
            notifier.success("Employee created");
            notifier.error("Employee not found");

            let toasts = notifier.toasts().get_untracked();
            assert_eq!(toasts.len(), 2);
            assert_eq!(toasts[0].kind, ToastKind::Success);
            assert_eq!(toasts[1].kind, ToastKind::Error);
            assert_ne!(toasts[0].id, toasts[1].id);
        });
    }

    #[test]
    fn dismiss_removes_only_the_addressed_toast() {
        with_runtime(|| {
            let notifier = Notifier::new();
            notifier.success("first");
            notifier.success("second");

            let first_id = notifier.toasts().get_untracked()[0].id;
            notifier.dismiss(first_id);

            let toasts = notifier.toasts().get_untracked();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].text, "second");
        });
    }
}
