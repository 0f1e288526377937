//! Notification sink: queueing, rendering, and auto-dismiss.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// How long a toast stays up before dismissing itself.
#[cfg(feature = "hydrate")]
const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(4);

/// Push a notification and schedule its auto-dismiss.
///
/// Fire-and-forget: callers never consume a result. Outside the browser
/// the toast is queued without a timer.
pub fn notify(ui: RwSignal<UiState>, kind: ToastKind, message: &str) {
    let Some(id) = ui.try_update(|u| u.push_toast(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(TOAST_LIFETIME).await;
            ui.update(|u| u.dismiss_toast(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Toast stack rendered top-center, above everything else.
#[component]
pub fn Toaster() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toaster">
            {move || {
                ui.get()
                    .toasts
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let message = toast.message.clone();
                        view! {
                            <div class=class>
                                <span class="toast__message">{message}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| ui.update(|u| u.dismiss_toast(id))
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
