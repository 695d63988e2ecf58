//! Recent-runs table with status badges.
//!
//! DESIGN
//! ======
//! Rows are static sample data; the table only maps status to badge style.

#[cfg(test)]
#[path = "run_table_test.rs"]
mod run_table_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Running,
    Failed,
    Queued,
}

impl RunStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Running => "Running",
            Self::Failed => "Failed",
            Self::Queued => "Queued",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Success => "badge badge--secondary",
            Self::Failed => "badge badge--destructive",
            Self::Queued => "badge badge--outline",
            Self::Running => "badge",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRow {
    pub id: &'static str,
    pub agent: &'static str,
    pub status: RunStatus,
    pub duration: &'static str,
    pub started_at: &'static str,
}

#[component]
pub fn RunTable(runs: &'static [RunRow]) -> impl IntoView {
    view! {
        <table class="run-table">
            <thead>
                <tr>
                    <th>"Agent"</th>
                    <th>"Status"</th>
                    <th>"Duration"</th>
                    <th>"Started"</th>
                </tr>
            </thead>
            <tbody>
                {runs
                    .iter()
                    .map(|run| {
                        view! {
                            <tr data-run-id=run.id>
                                <td class="run-table__agent">{run.agent}</td>
                                <td>
                                    <span class=run.status.badge_class()>{run.status.label()}</span>
                                </td>
                                <td>{run.duration}</td>
                                <td class="run-table__muted">{run.started_at}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
