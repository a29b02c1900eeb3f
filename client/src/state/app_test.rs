use super::*;
use crate::state::clients::{ClientStatus, ConnectionStatus};
use crate::state::insights::{CACHED_INSIGHTS_NOTICE, Urgency};

const NOW: Timestamp = Timestamp(1_771_223_400_000);

fn session() -> Session {
    Session {
        user_id: "u-1".into(),
        email: Some("ana@primecfo.test".into()),
        display_name: None,
        access_token: "tok".into(),
        refresh_token: Some("ref".into()),
        expires_at: None,
    }
}

fn signed_in() -> AppState {
    let mut state = AppState::with_fixtures();
    state.apply(Intent::SessionRestored(Some(session())), NOW);
    state
}

fn draft() -> ClientDraft {
    ClientDraft {
        name: "Ana Ruiz".into(),
        email: "ana@acme.test".into(),
        company_name: "Acme Co".into(),
        industry: "Retail".into(),
        phone: String::new(),
        status: ClientStatus::Active,
    }
}

// =============================================================
// Session gate and navigation
// =============================================================

#[test]
fn initial_state_is_loading_on_landing() {
    let state = AppState::with_fixtures();
    assert!(state.session.loading);
    assert_eq!(state.active_view(), View::Landing);
    assert!(!state.shows_workspace());
    assert_eq!(state.clients.len(), 6);
    assert_eq!(state.insights.items.len(), 8);
}

#[test]
fn restored_session_lands_on_dashboard() {
    let state = signed_in();
    assert!(!state.session.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.active_view(), View::Dashboard);
    assert!(state.shows_workspace());
}

#[test]
fn missing_session_on_restore_stays_on_landing() {
    let mut state = AppState::with_fixtures();
    state.apply(Intent::SessionRestored(None), NOW);
    assert!(!state.session.loading);
    assert_eq!(state.active_view(), View::Landing);
}

#[test]
fn protected_navigation_without_session_opens_login_and_keeps_view() {
    for target in View::WORKSPACE {
        let mut state = AppState::with_fixtures();
        state.apply(Intent::SessionRestored(None), NOW);
        state.apply(Intent::Navigate(target), NOW);
        assert_eq!(state.active_view(), View::Landing);
        assert!(state.login_prompt_open);
    }
}

#[test]
fn sign_in_after_refused_navigation_lands_on_dashboard() {
    let mut state = AppState::with_fixtures();
    state.apply(Intent::SessionRestored(None), NOW);
    state.apply(Intent::Navigate(View::Reports), NOW);
    state.apply(
        Intent::SessionChanged(SessionChange::new(SessionEvent::SignedIn, Some(session()))),
        NOW,
    );
    state.apply(Intent::LoginCompleted, NOW);
    assert_eq!(state.active_view(), View::Dashboard);
    assert!(!state.login_prompt_open);
}

#[test]
fn login_completed_greets_by_email_prefix() {
    let mut state = signed_in();
    state.apply(Intent::LoginCompleted, NOW);
    let notice = state.notices.latest().unwrap();
    assert_eq!(notice.title, "Welcome, ana!");
    assert_eq!(notice.description, "You are now signed in to PrimeCFO.ai");
}

#[test]
fn login_completed_without_session_greets_there() {
    let mut state = AppState::with_fixtures();
    state.apply(Intent::LoginCompleted, NOW);
    assert_eq!(state.notices.latest().unwrap().title, "Welcome, there!");
}

#[test]
fn authenticated_navigation_changes_view_and_closes_sidebar() {
    let mut state = signed_in();
    state.apply(Intent::ToggleSidebar, NOW);
    assert!(state.sidebar_open);
    let seq = state.router.scroll_reset_seq;
    state.apply(Intent::Navigate(View::Clients), NOW);
    assert_eq!(state.active_view(), View::Clients);
    assert!(!state.sidebar_open);
    assert_eq!(state.router.scroll_reset_seq, seq + 1);
}

#[test]
fn signed_out_event_returns_to_landing_and_clears_identity() {
    let mut state = signed_in();
    state.apply(Intent::Navigate(View::Settings), NOW);
    state.apply(Intent::SessionChanged(SessionChange::new(SessionEvent::SignedOut, None)), NOW);
    assert_eq!(state.active_view(), View::Landing);
    assert!(state.session.user().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn sign_out_success_returns_to_landing_with_notice() {
    let mut state = signed_in();
    state.apply(Intent::SignOutSucceeded, NOW);
    assert_eq!(state.active_view(), View::Landing);
    assert!(!state.is_authenticated());
    assert_eq!(state.notices.latest().unwrap().title, "Signed out");
}

#[test]
fn sign_out_failure_keeps_session_and_view() {
    let mut state = signed_in();
    state.apply(Intent::Navigate(View::Reports), NOW);
    let before = (state.session.clone(), state.router.clone(), state.clients.clone());
    state.apply(Intent::SignOutFailed("network".into()), NOW);
    assert_eq!((state.session.clone(), state.router.clone(), state.clients.clone()), before);
    let notice = state.notices.latest().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.description, "Failed to sign out. Please try again.");
}

#[test]
fn password_recovery_goes_to_settings_with_one_notice() {
    let mut state = AppState::with_fixtures();
    state.apply(
        Intent::SessionChanged(SessionChange::new(SessionEvent::PasswordRecovery, Some(session()))),
        NOW,
    );
    assert_eq!(state.active_view(), View::Settings);
    assert_eq!(state.notices.items().len(), 1);
    assert_eq!(state.notices.latest().unwrap().title, "Password Recovery");
}

#[test]
fn token_refresh_replaces_session_without_moving() {
    let mut state = signed_in();
    state.apply(Intent::Navigate(View::Insights), NOW);
    let mut refreshed = session();
    refreshed.access_token = "tok-2".into();
    state.apply(
        Intent::SessionChanged(SessionChange::new(SessionEvent::TokenRefreshed, Some(refreshed))),
        NOW,
    );
    assert_eq!(state.active_view(), View::Insights);
    assert_eq!(state.session.user().map(|s| s.access_token.as_str()), Some("tok-2"));
}

#[test]
fn get_started_depends_on_session() {
    let mut state = AppState::with_fixtures();
    state.apply(Intent::GetStarted, NOW);
    assert!(state.login_prompt_open);
    assert_eq!(state.active_view(), View::Landing);

    let mut state = signed_in();
    state.apply(Intent::Navigate(View::Landing), NOW);
    state.apply(Intent::GetStarted, NOW);
    assert_eq!(state.active_view(), View::Dashboard);
}

#[test]
fn open_and_close_login() {
    let mut state = AppState::with_fixtures();
    state.apply(Intent::OpenLogin, NOW);
    assert!(state.login_prompt_open);
    state.apply(Intent::CloseLogin, NOW);
    assert!(!state.login_prompt_open);
}

// =============================================================
// Clients
// =============================================================

#[test]
fn add_client_appends_and_announces() {
    let mut state = signed_in();
    state.apply(Intent::AddClient(draft()), NOW);
    assert_eq!(state.clients.len(), 7);
    let added = state.clients.list().last().unwrap();
    assert_eq!(added.connection_status, ConnectionStatus::Disconnected);
    assert!(added.last_sync.is_none());
    assert_eq!(state.notices.latest().unwrap().description, "Acme Co has been added successfully.");
}

#[test]
fn removing_selected_client_reassigns_selection() {
    let mut state = signed_in();
    state.apply(Intent::SelectClient("2".into()), NOW);
    state.apply(Intent::RemoveClient("2".into()), NOW);
    assert_eq!(state.clients.selected_id(), Some("1"));
    assert_eq!(state.notices.latest().unwrap().title, "Client removed");
}

#[test]
fn removing_unknown_client_is_silent() {
    let mut state = signed_in();
    state.apply(Intent::RemoveClient("missing".into()), NOW);
    assert!(state.notices.items().is_empty());
}

#[test]
fn connect_disconnect_sync_update_selected_client() {
    let mut state = signed_in();
    state.apply(Intent::SelectClient("5".into()), NOW);

    state.apply(Intent::ConnectSelected, NOW);
    let selected = state.clients.selected().unwrap();
    assert_eq!(selected.connection_status, ConnectionStatus::Connected);
    assert_eq!(selected.last_sync.as_deref(), Some("2026-02-16T06:30:00Z"));
    assert_eq!(state.notices.latest().unwrap().description, "UrbanFit Studios is now connected to QuickBooks.");

    state.apply(Intent::SyncSelected, Timestamp(NOW.millis() + 3_600_000));
    let selected = state.clients.selected().unwrap();
    assert_eq!(selected.last_sync.as_deref(), Some("2026-02-16T07:30:00Z"));
    assert_eq!(state.notices.latest().unwrap().title, "Sync Complete");

    state.apply(Intent::DisconnectSelected, NOW);
    let selected = state.clients.selected().unwrap();
    assert_eq!(selected.connection_status, ConnectionStatus::Disconnected);
    assert!(selected.last_sync.is_none());
    assert_eq!(state.notices.latest().unwrap().title, "Disconnected");
}

#[test]
fn connection_intents_without_selection_do_nothing() {
    let mut state = AppState::default();
    state.apply(Intent::ConnectSelected, NOW);
    state.apply(Intent::DisconnectSelected, NOW);
    state.apply(Intent::SyncSelected, NOW);
    assert!(state.notices.items().is_empty());
}

// =============================================================
// Insights
// =============================================================

#[test]
fn refresh_failure_keeps_cached_insights() {
    let mut state = signed_in();
    let before = state.insights.items.clone();
    state.apply(Intent::RefreshInsightsStarted, NOW);
    assert!(state.insights.generating);
    state.apply(Intent::RefreshInsightsFinished(Err("offline".into())), NOW);
    assert_eq!(state.insights.items, before);
    assert_eq!(state.insights.notice.as_deref(), Some(CACHED_INSIGHTS_NOTICE));
    assert!(!state.insights.generating);
}

#[test]
fn refresh_success_replaces_insights() {
    let mut state = signed_in();
    let generated = vec![
        GeneratedInsight { title: Some("A".into()), urgency: Some("watch".into()), ..GeneratedInsight::default() },
        GeneratedInsight { title: Some("B".into()), ..GeneratedInsight::default() },
    ];
    state.apply(Intent::RefreshInsightsStarted, NOW);
    state.apply(Intent::RefreshInsightsFinished(Ok(generated)), NOW);
    assert_eq!(state.insights.items.len(), 2);
    assert_eq!(state.insights.items[0].id, "ai-1771223400000-0");
    assert_eq!(state.insights.items[0].urgency, Urgency::Watch);
    assert_eq!(state.insights.items[1].id, "ai-1771223400000-1");
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notices_are_capped_and_ids_increase() {
    let mut notices = Notices::default();
    let ids: Vec<u64> = (0..5).map(|n| notices.push(NoticeKind::Info, format!("n{n}"), "")).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    let kept: Vec<_> = notices.items().iter().map(|n| n.id).collect();
    assert_eq!(kept, vec![3, 4, 5]);
}

#[test]
fn dismiss_notice_removes_only_that_one() {
    let mut state = signed_in();
    state.apply(Intent::AddClient(draft()), NOW);
    state.apply(Intent::SyncSelected, NOW);
    let first = state.notices.items()[0].id;
    state.apply(Intent::DismissNotice(first), NOW);
    assert_eq!(state.notices.items().len(), 1);
    assert_eq!(state.notices.latest().unwrap().title, "Sync Complete");
}

#[test]
fn insight_filter_and_expansion_go_through_intents() {
    let mut state = AppState::with_fixtures();
    state.apply(Intent::FilterInsights(UrgencyFilter::Only(Urgency::ActionRequired)), NOW);
    let ids: Vec<_> = state.insights.filtered().iter().map(|i| i.id.clone()).collect();
    assert_eq!(ids, vec!["2", "4"]);

    state.apply(Intent::ToggleInsight("2".into()), NOW);
    assert_eq!(state.insights.expanded.as_deref(), Some("2"));
    state.apply(Intent::ToggleInsight("2".into()), NOW);
    assert!(state.insights.expanded.is_none());
}

#[test]
fn panel_notices_go_through_intents() {
    let mut state = signed_in();
    state.apply(
        Intent::Notify { kind: NoticeKind::Info, title: "Export queued".into(), description: "Profit & Loss".into() },
        NOW,
    );
    let latest = state.notices.latest().unwrap();
    assert_eq!(latest.kind, NoticeKind::Info);
    assert_eq!(latest.title, "Export queued");
    assert_eq!(state.active_view(), View::Dashboard);
}

#[test]
fn insights_view_filter_leaves_dashboard_card_whole() {
    let mut state = signed_in();
    state.apply(Intent::Navigate(View::Insights), NOW);
    state.apply(Intent::FilterInsights(UrgencyFilter::Only(Urgency::Positive)), NOW);
    state.apply(Intent::Navigate(View::Dashboard), NOW);

    let ids: Vec<_> = state.insights.visible(true).iter().map(|i| i.id.clone()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
    assert_eq!(state.insights.filter, UrgencyFilter::Only(Urgency::Positive));
}
