//! Top-level application state and its single mutator.
//!
//! DESIGN
//! ======
//! `AppState` owns the session gate, the view router, the client registry and
//! the insight list. Components hold a `RwSignal<AppState>` from context and
//! change it only by sending an `Intent` through `AppState::apply`, so every
//! transition is one `&mut self` call and observers never see half an update.
//! Async work (identity calls, insight generation, the simulated connection
//! timers) happens in components, which apply an intent when it resolves.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::GeneratedInsight;
use crate::state::clients::{ClientDraft, ClientRegistry};
use crate::state::insights::{InsightsState, UrgencyFilter};
use crate::state::router::{NavigateOutcome, View, ViewRouter};
use crate::state::session::{Session, SessionChange, SessionEvent, SessionGate};
use crate::util::clock::Timestamp;

/// Most notices kept on screen at once; older ones are dropped first.
pub const MAX_NOTICES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notices {
    items: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Queue a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, title: title.into(), description: description.into() });
        if self.items.len() > MAX_NOTICES {
            let overflow = self.items.len() - MAX_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    #[must_use]
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Notice> {
        self.items.last()
    }
}

/// Every state change the UI can request.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    Navigate(View),
    GetStarted,
    OpenLogin,
    CloseLogin,
    ToggleSidebar,
    SessionRestored(Option<Session>),
    SessionChanged(SessionChange),
    LoginCompleted,
    SignOutSucceeded,
    SignOutFailed(String),
    AddClient(ClientDraft),
    RemoveClient(String),
    SelectClient(String),
    ConnectSelected,
    DisconnectSelected,
    SyncSelected,
    RefreshInsightsStarted,
    RefreshInsightsFinished(Result<Vec<GeneratedInsight>, String>),
    FilterInsights(UrgencyFilter),
    ToggleInsight(String),
    /// Panel-raised notice, e.g. report export acknowledgement.
    Notify { kind: NoticeKind, title: String, description: String },
    DismissNotice(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub session: SessionGate,
    pub router: ViewRouter,
    pub clients: ClientRegistry,
    pub insights: InsightsState,
    pub login_prompt_open: bool,
    /// Mobile sidebar drawer.
    pub sidebar_open: bool,
    pub notices: Notices,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: SessionGate::pending(),
            router: ViewRouter::default(),
            clients: ClientRegistry::default(),
            insights: InsightsState::default(),
            login_prompt_open: false,
            sidebar_open: false,
            notices: Notices::default(),
        }
    }
}

impl AppState {
    /// Initial state seeded with the bundled demo data.
    #[must_use]
    pub fn with_fixtures() -> Self {
        Self {
            clients: ClientRegistry::new(crate::fixtures::clients()),
            insights: InsightsState::new(crate::fixtures::insights()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn active_view(&self) -> View {
        self.router.active
    }

    /// The workspace layout shows only with a session and off the landing page.
    #[must_use]
    pub fn shows_workspace(&self) -> bool {
        self.is_authenticated() && self.router.active != View::Landing
    }

    /// Apply one intent.
    pub fn apply(&mut self, intent: Intent, now: Timestamp) {
        match intent {
            Intent::Navigate(view) => self.navigate(view),
            Intent::GetStarted => {
                if self.is_authenticated() {
                    self.router.force(View::Dashboard);
                } else {
                    self.login_prompt_open = true;
                }
            }
            Intent::OpenLogin => self.login_prompt_open = true,
            Intent::CloseLogin => self.login_prompt_open = false,
            Intent::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            Intent::SessionRestored(session) => {
                let restored = session.is_some();
                self.session.set(session);
                if restored {
                    self.router.force(View::Dashboard);
                }
            }
            Intent::SessionChanged(change) => self.session_changed(change),
            Intent::LoginCompleted => {
                self.login_prompt_open = false;
                self.router.force(View::Dashboard);
                let name = self.session.user().map_or_else(|| "there".to_owned(), Session::display_name);
                self.notices.push(
                    NoticeKind::Success,
                    format!("Welcome, {name}!"),
                    "You are now signed in to PrimeCFO.ai",
                );
            }
            Intent::SignOutSucceeded => {
                self.signed_out();
                self.notices
                    .push(NoticeKind::Info, "Signed out", "You have been signed out successfully.");
            }
            Intent::SignOutFailed(detail) => {
                leptos::logging::warn!("sign out failed: {detail}");
                self.notices
                    .push(NoticeKind::Error, "Error", "Failed to sign out. Please try again.");
            }
            Intent::AddClient(draft) => {
                let company = draft.company_name.clone();
                self.clients.add(draft, now);
                self.notices.push(
                    NoticeKind::Success,
                    "Client added",
                    format!("{company} has been added successfully."),
                );
            }
            Intent::RemoveClient(id) => {
                if self.clients.remove(&id).is_some() {
                    self.notices
                        .push(NoticeKind::Info, "Client removed", "The client has been removed.");
                }
            }
            Intent::SelectClient(id) => {
                self.clients.select(&id);
                self.sidebar_open = false;
            }
            Intent::ConnectSelected => {
                if let Some((id, company)) = self.selected_ref() {
                    self.clients.connect(&id, now);
                    self.notices.push(
                        NoticeKind::Success,
                        "QuickBooks Connected",
                        format!("{company} is now connected to QuickBooks."),
                    );
                }
            }
            Intent::DisconnectSelected => {
                if let Some((id, company)) = self.selected_ref() {
                    self.clients.disconnect(&id);
                    self.notices.push(
                        NoticeKind::Warning,
                        "Disconnected",
                        format!("{company} has been disconnected from QuickBooks."),
                    );
                }
            }
            Intent::SyncSelected => {
                if let Some((id, _)) = self.selected_ref() {
                    self.clients.sync(&id, now);
                    self.notices.push(
                        NoticeKind::Success,
                        "Sync Complete",
                        "Financial data has been updated from QuickBooks.",
                    );
                }
            }
            Intent::RefreshInsightsStarted => self.insights.begin_refresh(),
            Intent::RefreshInsightsFinished(outcome) => {
                if let Err(err) = &outcome {
                    leptos::logging::warn!("insight refresh failed: {err}");
                }
                self.insights.finish_refresh(outcome, now);
            }
            Intent::FilterInsights(filter) => self.insights.filter = filter,
            Intent::ToggleInsight(id) => self.insights.toggle_expanded(&id),
            Intent::Notify { kind, title, description } => {
                self.notices.push(kind, title, description);
            }
            Intent::DismissNotice(id) => self.notices.dismiss(id),
        }
    }

    fn navigate(&mut self, view: View) {
        match self.router.navigate(view, self.is_authenticated()) {
            NavigateOutcome::Changed => self.sidebar_open = false,
            NavigateOutcome::LoginRequired => self.login_prompt_open = true,
        }
    }

    fn session_changed(&mut self, change: SessionChange) {
        let SessionChange { event, session } = change;
        match event {
            SessionEvent::SignedIn => {
                let has_session = session.is_some();
                self.session.set(session);
                if has_session {
                    self.router.force(View::Dashboard);
                }
            }
            SessionEvent::SignedOut => self.signed_out(),
            SessionEvent::PasswordRecovery => {
                self.session.set(session);
                self.notices.push(
                    NoticeKind::Info,
                    "Password Recovery",
                    "You can now set a new password in Settings.",
                );
                self.router.force(View::Settings);
            }
            SessionEvent::TokenRefreshed => self.session.set(session),
        }
    }

    fn signed_out(&mut self) {
        self.session.clear();
        self.router.force(View::Landing);
        self.sidebar_open = false;
    }

    fn selected_ref(&self) -> Option<(String, String)> {
        self.clients
            .selected()
            .map(|c| (c.id.clone(), c.company_name.clone()))
    }
}

/// Apply `intent` to the shared app signal at the current time.
pub fn dispatch(app: RwSignal<AppState>, intent: Intent) {
    app.update(|state| state.apply(intent, Timestamp::now()));
}
