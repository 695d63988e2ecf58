//! Headline metric card for the dashboard.

use leptos::prelude::*;

/// A titled metric with a short glyph.
#[component]
pub fn StatCard(title: &'static str, value: &'static str, glyph: &'static str) -> impl IntoView {
    view! {
        <article class="card stat-card">
            <header class="stat-card__header">
                <h3 class="stat-card__title">{title}</h3>
                <span class="stat-card__glyph" aria-hidden="true">{glyph}</span>
            </header>
            <div class="stat-card__value">{value}</div>
        </article>
    }
}
