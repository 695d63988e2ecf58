//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::{IdentityConfig, META_IDENTITY_ANON_KEY, META_IDENTITY_URL};
use crate::net::gotrue::GoTrueClient;
use crate::net::identity::Identity;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Expects an [`IdentityConfig`] in context; it is written into `<meta>`
/// tags so the hydrated client can find the provider.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let identity = use_context::<IdentityConfig>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_IDENTITY_URL content=identity.url/>
                <meta name=META_IDENTITY_ANON_KEY content=identity.anon_key/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Identity config for this render: shell meta tags in the browser, the
/// host-provided context on the server.
fn resolve_identity_config() -> IdentityConfig {
    #[cfg(feature = "hydrate")]
    let config = IdentityConfig::from_document();
    #[cfg(not(feature = "hydrate"))]
    let config = use_context::<IdentityConfig>();

    config.unwrap_or_else(|| {
        log::warn!("identity provider not configured; sign-in is disabled");
        IdentityConfig::default()
    })
}

/// Root application component.
///
/// Provides the identity provider and toast queue; session state is owned
/// per screen by the pages themselves.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let identity: Identity = Arc::new(GoTrueClient::new(resolve_identity_config()));
    provide_context(identity);
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/agent-dashboard.css"/>
        <Title text="AI Agent Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <DashboardPage require_session=true/> }/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
