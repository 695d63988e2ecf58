//! Session-driven redirects between the login and dashboard screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both screens install the same guard with their own [`Screen`]. Redirects
//! replace the history entry so back-navigation cannot land on a screen the
//! session state has already ruled out.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{LOGIN_PATH, ROOT_PATH};
use crate::state::auth::{SessionStatus, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

impl Screen {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Dashboard => ROOT_PATH,
        }
    }
}

/// Screen to redirect to from `screen` given `status`, if any.
/// Nothing fires until the status has resolved.
pub fn redirect_target(screen: Screen, status: &SessionStatus) -> Option<Screen> {
    match (screen, status) {
        (Screen::Login, SessionStatus::Present(_)) => Some(Screen::Dashboard),
        (Screen::Dashboard, SessionStatus::Absent) => Some(Screen::Login),
        _ => None,
    }
}

/// Navigation options for guard redirects: replace, never push.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect away from `screen` whenever the store says it is the wrong one.
pub fn install_route_guard<F>(screen: Screen, store: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let status = store.status();
        if let Some(target) = redirect_target(screen, &status) {
            log::debug!("route guard: {screen:?} -> {target:?}");
            navigate(target.path(), replace_options());
        }
    });
}
