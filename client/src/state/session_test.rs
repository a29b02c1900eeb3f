use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn session(email: Option<&str>, name: Option<&str>) -> Session {
    Session {
        user_id: "u-1".into(),
        email: email.map(str::to_owned),
        display_name: name.map(str::to_owned),
        access_token: "tok".into(),
        refresh_token: None,
        expires_at: None,
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn display_name_prefers_profile_name() {
    assert_eq!(session(Some("ana@x.test"), Some("Ana Ruiz")).display_name(), "Ana Ruiz");
}

#[test]
fn display_name_falls_back_to_email_local_part() {
    assert_eq!(session(Some("ana@x.test"), Some("  ")).display_name(), "ana");
}

#[test]
fn display_name_falls_back_to_there() {
    assert_eq!(session(None, None).display_name(), "there");
    assert_eq!(session(Some("@x.test"), None).display_name(), "there");
}

#[test]
fn is_expired_compares_against_now() {
    let mut s = session(None, None);
    assert!(!s.is_expired(100));
    s.expires_at = Some(100);
    assert!(s.is_expired(100));
    assert!(!s.is_expired(99));
}

// =============================================================
// SessionGate
// =============================================================

#[test]
fn pending_gate_is_loading_and_unauthenticated() {
    let gate = SessionGate::pending();
    assert!(gate.loading);
    assert!(!gate.is_authenticated());
}

#[test]
fn set_and_clear_toggle_authentication() {
    let mut gate = SessionGate::pending();
    gate.set(Some(session(Some("a@b.test"), None)));
    assert!(gate.is_authenticated());
    assert!(!gate.loading);
    assert_eq!(gate.user().map(|u| u.user_id.as_str()), Some("u-1"));
    gate.clear();
    assert!(!gate.is_authenticated());
    assert!(gate.user().is_none());
}

// =============================================================
// SessionEvents
// =============================================================

#[test]
fn emit_reaches_every_subscriber() {
    let hub = SessionEvents::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let a = {
        let hits = Arc::clone(&hits);
        hub.subscribe(move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };
    let b = {
        let hits = Arc::clone(&hits);
        hub.subscribe(move |_| {
            hits.fetch_add(10, Ordering::SeqCst);
        })
    };
    hub.emit(&SessionChange::new(SessionEvent::SignedOut, None));
    assert_eq!(hits.load(Ordering::SeqCst), 11);
    drop((a, b));
}

#[test]
fn dropping_subscription_unsubscribes() {
    let hub = SessionEvents::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let sub = {
        let hits = Arc::clone(&hits);
        hub.subscribe(move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };
    assert_eq!(hub.subscriber_count(), 1);
    drop(sub);
    assert_eq!(hub.subscriber_count(), 0);
    hub.emit(&SessionChange::new(SessionEvent::SignedIn, None));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn subscribers_run_in_subscription_order() {
    let hub = SessionEvents::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    let subs: Vec<_> = (0..3)
        .map(|n| {
            let order = Arc::clone(&order);
            hub.subscribe(move |_| order.lock().unwrap().push(n))
        })
        .collect();
    hub.emit(&SessionChange::new(SessionEvent::TokenRefreshed, None));
    assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    drop(subs);
}

#[test]
fn listener_receives_event_and_session() {
    let hub = SessionEvents::new();
    let seen = Arc::new(Mutex::new(None));
    let _sub = {
        let seen = Arc::clone(&seen);
        hub.subscribe(move |change| *seen.lock().unwrap() = Some(change.clone()))
    };
    let change = SessionChange::new(SessionEvent::PasswordRecovery, Some(session(Some("a@b.test"), None)));
    hub.emit(&change);
    assert_eq!(seen.lock().unwrap().as_ref(), Some(&change));
}

#[test]
fn subscription_outliving_hub_drops_cleanly() {
    let hub = SessionEvents::new();
    let sub = hub.subscribe(|_| {});
    drop(hub);
    drop(sub);
}

#[test]
fn clones_share_listeners() {
    let hub = SessionEvents::new();
    let clone = hub.clone();
    let _sub = clone.subscribe(|_| {});
    assert_eq!(hub.subscriber_count(), 1);
}
