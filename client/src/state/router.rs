//! In-memory view router with a login gate on protected views.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

/// Top-level panel selected by the router.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Landing,
    Dashboard,
    Reports,
    Insights,
    Clients,
    Connect,
    Settings,
}

impl View {
    pub const ALL: [Self; 7] = [
        Self::Landing,
        Self::Dashboard,
        Self::Reports,
        Self::Insights,
        Self::Clients,
        Self::Connect,
        Self::Settings,
    ];

    /// Views shown in the workspace sidebar, in order.
    pub const WORKSPACE: [Self; 6] = [
        Self::Dashboard,
        Self::Reports,
        Self::Insights,
        Self::Clients,
        Self::Connect,
        Self::Settings,
    ];

    /// Every view except the landing page needs a session.
    #[must_use]
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Landing)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Dashboard => "Dashboard",
            Self::Reports => "Reports",
            Self::Insights => "AI Insights",
            Self::Clients => "Clients",
            Self::Connect => "QuickBooks",
            Self::Settings => "Settings",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Dashboard => "dashboard",
            Self::Reports => "reports",
            Self::Insights => "insights",
            Self::Clients => "clients",
            Self::Connect => "connect",
            Self::Settings => "settings",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug() == slug)
    }
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigateOutcome {
    Changed,
    /// Target is protected and there is no session; the view did not change.
    LoginRequired,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewRouter {
    pub active: View,
    /// Bumped on every view change; the layout scrolls to top when it moves.
    pub scroll_reset_seq: u64,
}

impl ViewRouter {
    /// Go to `target`, unless it is protected and `authenticated` is false.
    ///
    /// A refused destination is not remembered.
    pub fn navigate(&mut self, target: View, authenticated: bool) -> NavigateOutcome {
        if target.is_protected() && !authenticated {
            return NavigateOutcome::LoginRequired;
        }
        self.force(target);
        NavigateOutcome::Changed
    }

    /// Set the view without the login check. Used by session transitions.
    pub fn force(&mut self, target: View) {
        self.active = target;
        self.scroll_reset_seq += 1;
    }
}
