//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and notifications while reading shared
//! state from Leptos context providers.

pub mod run_table;
pub mod stat_card;
pub mod toast_host;
