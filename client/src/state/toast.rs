//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Newest first, capped at [`TOAST_LIMIT`]. Ids are monotonic so a delayed
//! dismiss never removes a newer toast that reused a slot.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const TOAST_LIMIT: usize = 3;
pub const DISMISS_AFTER_MS: u64 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Default,
    Destructive,
}

/// Message to show the user, before it is queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Default, message: message.into() }
    }

    pub fn destructive(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Destructive, message: message.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue `notice`, evicting the oldest beyond the limit. Returns its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.insert(0, Toast { id, kind: notice.kind, message: notice.message });
        self.items.truncate(TOAST_LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
