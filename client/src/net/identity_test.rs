use std::sync::atomic::AtomicUsize;

use super::*;
use crate::net::types::{AuthChangeEvent, SessionChange};

// =============================================================
// Helpers
// =============================================================

fn counting_listener(count: &Arc<AtomicUsize>) -> SessionListener {
    let count = Arc::clone(count);
    Arc::new(move |_| {
        count.fetch_add(1, Ordering::SeqCst);
    })
}

fn signed_out() -> SessionNotice {
    Ok(SessionChange::signed_out())
}

// =============================================================
// ListenerRegistry
// =============================================================

#[test]
fn emit_reaches_every_subscriber() {
    let registry = ListenerRegistry::new();
    let count = Arc::new(AtomicUsize::new(0));
    let _a = registry.subscribe(counting_listener(&count));
    let _b = registry.subscribe(counting_listener(&count));

    registry.emit(&signed_out());

    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert_eq!(registry.len(), 2);
}

#[test]
fn emit_preserves_event_order() {
    let registry = ListenerRegistry::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _handle = registry.subscribe(Arc::new(move |notice: SessionNotice| {
        sink.lock().unwrap().push(notice.unwrap().event);
    }));

    registry.emit(&Ok(SessionChange { event: AuthChangeEvent::TokenRefreshed, session: None }));
    registry.emit(&signed_out());

    assert_eq!(*seen.lock().unwrap(), vec![AuthChangeEvent::TokenRefreshed, AuthChangeEvent::SignedOut]);
}

#[test]
fn listener_may_unsubscribe_while_notified() {
    let registry = ListenerRegistry::new();
    let slot: Arc<Mutex<Option<SubscriptionHandle>>> = Arc::new(Mutex::new(None));
    let slot_in = Arc::clone(&slot);
    let handle = registry.subscribe(Arc::new(move |_| {
        if let Some(handle) = slot_in.lock().unwrap().as_ref() {
            handle.unsubscribe();
        }
    }));
    *slot.lock().unwrap() = Some(handle);

    registry.emit(&signed_out());

    assert!(registry.is_empty());
}

// =============================================================
// SubscriptionHandle
// =============================================================

#[test]
fn unsubscribe_stops_delivery() {
    let registry = ListenerRegistry::new();
    let count = Arc::new(AtomicUsize::new(0));
    let handle = registry.subscribe(counting_listener(&count));

    handle.unsubscribe();
    registry.emit(&signed_out());

    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert!(!handle.is_active());
}

#[test]
fn unsubscribe_twice_only_removes_own_listener() {
    let registry = ListenerRegistry::new();
    let count = Arc::new(AtomicUsize::new(0));
    let first = registry.subscribe(counting_listener(&count));
    let _second = registry.subscribe(counting_listener(&count));

    first.unsubscribe();
    first.unsubscribe();

    assert_eq!(registry.len(), 1);
    registry.emit(&signed_out());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn dropping_handle_unsubscribes() {
    let registry = ListenerRegistry::new();
    let count = Arc::new(AtomicUsize::new(0));
    {
        let _handle = registry.subscribe(counting_listener(&count));
        assert_eq!(registry.len(), 1);
    }
    assert!(registry.is_empty());
}

#[test]
fn handle_outliving_registry_is_harmless() {
    let registry = ListenerRegistry::new();
    let handle = registry.subscribe(Arc::new(|_| {}));
    drop(registry);
    handle.unsubscribe();
    assert!(!handle.is_active());
}
