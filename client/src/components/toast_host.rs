//! Toast overlay and the `notify` entry point pages use to raise one.

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastKind, ToastState};

/// Queue `notice` and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let mut id = 0;
    toasts.update(|t| id = t.push(notice));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::toast::DISMISS_AFTER_MS)).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toast-host" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                <li
                    class="toast"
                    class:toast--destructive=toast.kind == ToastKind::Destructive
                    role="status"
                >
                    <span class="toast__message">{toast.message.clone()}</span>
                    <button
                        class="toast__close"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.update(|t| t.dismiss(toast.id))
                    >
                        "×"
                    </button>
                </li>
            </For>
        </ol>
    }
}
