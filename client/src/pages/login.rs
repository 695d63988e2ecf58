//! Login page: email + password sign-in and sign-up.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Mounts its own session store and sync, and the Login route
//! guard sends an already-authenticated visitor to the dashboard. Sign-in
//! results also arrive through the change stream; the direct result is used
//! for immediate feedback.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::notify;
use crate::config::{confirmation_url, current_origin, login_canonical_url, ROOT_PATH};
use crate::net::identity::Identity;
use crate::state::auth::SessionStore;
use crate::state::credentials::{AuthMode, CredentialForm};
use crate::state::toast::ToastState;
use crate::util::auth::{install_session_sync, submit_credentials, submit_feedback};
use crate::util::route_guard::{Screen, install_route_guard, replace_options};

#[component]
pub fn LoginPage() -> impl IntoView {
    let identity = expect_context::<Identity>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let store = SessionStore::new();
    install_session_sync(identity.clone(), store);
    install_route_guard(Screen::Login, store, navigate.clone());

    let form = RwSignal::new(CredentialForm::default());

    // In-flight requests are not cancelled; their results are dropped once
    // the page is gone.
    let mounted = Arc::new(AtomicBool::new(true));
    let mounted_cleanup = Arc::clone(&mounted);
    on_cleanup(move || mounted_cleanup.store(false, Ordering::Release));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut credentials = None;
        form.update(|f| credentials = f.begin_submit());
        let Some(credentials) = credentials else {
            return;
        };
        let mode = form.get_untracked().mode;
        let identity = identity.clone();
        let mounted = Arc::clone(&mounted);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let callback_url = confirmation_url(&current_origin());
            let result = submit_credentials(identity.as_ref(), mode, &credentials, &callback_url).await;
            if !mounted.load(Ordering::Acquire) {
                return;
            }
            form.update(|f| f.finish_submit(mode, result.is_ok()));
            let feedback = submit_feedback(mode, &result);
            notify(toasts, feedback.notice);
            if let Some(target) = feedback.redirect {
                navigate(target.path(), replace_options());
            }
        });
    };

    let mode = move || form.with(|f| f.mode);
    let submitting = move || form.with(|f| f.submitting);
    let canonical = login_canonical_url(&current_origin());

    view! {
        <Title text="Login or Sign Up – AI Agent Dashboard"/>
        <Meta name="description" content="Login or create an account to access the AI Agent Dashboard"/>
        <Link rel="canonical" href=canonical/>

        <div class="login-page">
            <header class="login-page__header">
                <h1>"Login or Sign Up"</h1>
                <a class="btn btn--ghost" href=ROOT_PATH>"Back to Dashboard"</a>
            </header>

            <main class="login-page__main">
                <section class="card login-card">
                    <h2 class="login-card__title">"Access your account"</h2>
                    <div class="tabs" role="tablist">
                        {[AuthMode::SignIn, AuthMode::SignUp]
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        class="tabs__trigger"
                                        class:tabs__trigger--active=move || mode() == tab
                                        role="tab"
                                        type="button"
                                        data-tab=tab.as_str()
                                        on:click=move |_| form.update(|f| f.set_mode(tab))
                                    >
                                        {tab.tab_label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <form class="login-form" on:submit=on_submit>
                        <label class="login-form__label" for="email">"Email"</label>
                        <input
                            id="email"
                            class="login-input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <Show when=move || form.with(|f| f.errors.email.is_some())>
                            <p class="login-form__error">{move || form.with(|f| f.errors.email.unwrap_or_default())}</p>
                        </Show>

                        <label class="login-form__label" for="password">"Password"</label>
                        <input
                            id="password"
                            class="login-input"
                            type="password"
                            autocomplete=move || mode().password_autocomplete()
                            placeholder="••••••••"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <Show when=move || form.with(|f| f.errors.password.is_some())>
                            <p class="login-form__error">
                                {move || form.with(|f| f.errors.password.unwrap_or_default())}
                            </p>
                        </Show>

                        <button class="btn btn--primary login-button" type="submit" disabled=submitting>
                            {move || if submitting() { mode().busy_label() } else { mode().submit_label() }}
                        </button>
                    </form>
                </section>
            </main>
        </div>
    }
}
