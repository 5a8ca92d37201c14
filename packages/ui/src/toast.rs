//! Popup notifications. A single toast is shown at a time and dismisses
//! itself after a short delay, like the original portal's popups.

use dioxus::prelude::*;

const TOAST_MILLIS: u64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Handle for raising toasts from any event handler.
#[derive(Clone, Copy)]
pub struct Toasts {
    current: Signal<Option<Toast>>,
}

impl Toasts {
    pub fn success(self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Success);
    }

    pub fn error(self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    fn show(mut self, message: String, kind: ToastKind) {
        self.current.set(Some(Toast { message, kind }));

        let mut current = self.current;
        spawn(async move {
            sleep_millis(TOAST_MILLIS).await;
            current.set(None);
        });
    }
}

async fn sleep_millis(millis: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(millis)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(millis)).await;
}

/// Get the toast handle provided by [`ToastProvider`].
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Provides the toast context and renders the active toast as an overlay.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let current = use_signal(|| Option::<Toast>::None);
    use_context_provider(|| Toasts { current });

    rsx! {
        {children}

        if let Some(toast) = current() {
            {
                let (class, icon) = match toast.kind {
                    ToastKind::Success => ("toast toast-success", "✅"),
                    ToastKind::Error => ("toast toast-error", "❌"),
                };
                rsx! {
                    div {
                        class: "{class}",
                        span { class: "toast-icon", "{icon}" }
                        span { "{toast.message}" }
                    }
                }
            }
        }
    }
}
