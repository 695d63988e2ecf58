//! Dashboard page with headline metrics and recent agent runs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route. With `require_session` the page
//! mounts its own session sync and the Dashboard route guard; the content
//! is only shown once a session is present.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::run_table::{RunRow, RunStatus, RunTable};
use crate::components::stat_card::StatCard;
use crate::components::toast_host::notify;
use crate::net::identity::Identity;
use crate::state::auth::{SessionStatus, SessionStore};
use crate::state::toast::ToastState;
use crate::util::auth::{install_session_sync, logout};
use crate::util::route_guard::{Screen, install_route_guard, replace_options};

const STATS: [(&str, &str, &str); 3] = [
    ("Active Agents", "5", "◎"),
    ("Total Runs Today", "128", "↯"),
    ("Pending Tasks", "12", "◷"),
];

const SAMPLE_RUNS: &[RunRow] = &[
    RunRow {
        id: "1",
        agent: "Researcher-01",
        status: RunStatus::Success,
        duration: "2m 14s",
        started_at: "2025-08-08 10:21",
    },
    RunRow { id: "2", agent: "Planner-Alpha", status: RunStatus::Running, duration: "—", started_at: "2025-08-08 10:25" },
    RunRow { id: "3", agent: "Crawler-Beta", status: RunStatus::Failed, duration: "38s", started_at: "2025-08-08 10:02" },
    RunRow { id: "4", agent: "Analyst-Gamma", status: RunStatus::Queued, duration: "—", started_at: "2025-08-08 10:27" },
];

/// Dashboard page. Redirects to the login page when `require_session` is
/// set and the session resolves to absent.
#[component]
pub fn DashboardPage(#[prop(optional)] require_session: bool) -> impl IntoView {
    let identity = expect_context::<Identity>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let store = SessionStore::new();

    if require_session {
        install_session_sync(identity.clone(), store);
        install_route_guard(Screen::Dashboard, store, navigate.clone());
    }

    let mounted = Arc::new(AtomicBool::new(true));
    let mounted_cleanup = Arc::clone(&mounted);
    on_cleanup(move || mounted_cleanup.store(false, Ordering::Release));

    // Logout settles inside the content view; navigation happens out here.
    let redirect_to = RwSignal::new(None::<Screen>);
    Effect::new(move || {
        if let Some(target) = redirect_to.get() {
            redirect_to.set(None);
            navigate(target.path(), replace_options());
        }
    });

    let logging_out = RwSignal::new(false);
    let on_logout = Callback::new(move |()| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        let identity = identity.clone();
        let mounted = Arc::clone(&mounted);
        leptos::task::spawn_local(async move {
            let feedback = logout(identity.as_ref(), &store).await;
            if !mounted.load(Ordering::Acquire) {
                return;
            }
            logging_out.set(false);
            notify(toasts, feedback.notice);
            redirect_to.set(feedback.redirect);
        });
    });

    let show_content = move || !require_session || store.status().has_session();

    view! {
        <Title text="AI Agent Dashboard"/>
        <Show
            when=show_content
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || match store.status() {
                                SessionStatus::Unknown => "Loading...",
                                _ => "Redirecting to login...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <div>
                        <h1>"AI Agent Dashboard"</h1>
                        <p class="dashboard-page__subtitle">"Monitor agents, runs, and system activity"</p>
                    </div>
                    <div class="dashboard-page__actions">
                        <button class="btn btn--primary" aria-label="Start new run">
                            "▶ New Run"
                        </button>
                        <Show when=move || require_session>
                            <button
                                class="btn dashboard-page__logout"
                                on:click=move |_| on_logout.run(())
                                disabled=move || logging_out.get()
                            >
                                "Logout"
                            </button>
                        </Show>
                    </div>
                </header>

                <Show when=move || store.sync_fault().is_some()>
                    <p class="dashboard-page__error" role="alert">
                        "Session sync interrupted: "
                        {move || store.sync_fault().unwrap_or_default()}
                    </p>
                </Show>

                <main class="dashboard-page__main">
                    <section aria-label="Key metrics" class="dashboard-page__stats">
                        {STATS
                            .into_iter()
                            .map(|(title, value, glyph)| view! { <StatCard title=title value=value glyph=glyph/> })
                            .collect::<Vec<_>>()}
                    </section>

                    <section aria-label="Recent runs" class="card dashboard-page__runs">
                        <header class="dashboard-page__runs-header">
                            <h2>"Recent Runs"</h2>
                            <span class="dashboard-page__live">"Live updates"</span>
                        </header>
                        <RunTable runs=SAMPLE_RUNS/>
                        <p class="dashboard-page__note">"Sample data for preview"</p>
                    </section>
                </main>
            </div>
        </Show>
    }
}
