//! Account settings panel state. Nothing here is persisted.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncFrequency {
    Realtime,
    Hourly,
    #[default]
    Daily,
    Weekly,
    Manual,
}

impl SyncFrequency {
    pub const ALL: [Self; 5] = [Self::Realtime, Self::Hourly, Self::Daily, Self::Weekly, Self::Manual];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Realtime => "realtime",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Manual => "manual",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Realtime => "Real-time",
            Self::Hourly => "Every Hour",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Manual => "Manual Only",
        }
    }

    #[must_use]
    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.value() == raw)
    }
}

/// On/off switches on the settings panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    EmailNotifications,
    InsightAlerts,
    ConnectionAlerts,
    WeeklyDigest,
    TwoFactor,
}

impl Toggle {
    /// Switches listed under "Notifications".
    pub const NOTIFICATIONS: [Self; 4] =
        [Self::EmailNotifications, Self::InsightAlerts, Self::ConnectionAlerts, Self::WeeklyDigest];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EmailNotifications => "Email Notifications",
            Self::InsightAlerts => "AI Insight Alerts",
            Self::ConnectionAlerts => "Connection Alerts",
            Self::WeeklyDigest => "Weekly Digest",
            Self::TwoFactor => "Two-Factor Authentication",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::EmailNotifications => "Receive email alerts for important events",
            Self::InsightAlerts => "Get notified when new insights are generated",
            Self::ConnectionAlerts => "Alert when a QuickBooks connection has issues",
            Self::WeeklyDigest => "Receive a weekly summary of all client metrics",
            Self::TwoFactor => "Add an extra layer of security to your account",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsState {
    pub company_name: String,
    pub email: String,
    pub sync_frequency: SyncFrequency,
    pub email_notifications: bool,
    pub insight_alerts: bool,
    pub connection_alerts: bool,
    pub weekly_digest: bool,
    pub two_factor: bool,
    /// Set by `save`; cleared by any edit or by the confirmation timeout.
    pub saved: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            company_name: "PrimeCFO Admin".to_owned(),
            email: "admin@primecfo.ai".to_owned(),
            sync_frequency: SyncFrequency::Daily,
            email_notifications: true,
            insight_alerts: true,
            connection_alerts: true,
            weekly_digest: false,
            two_factor: false,
            saved: false,
        }
    }
}

impl SettingsState {
    /// Milliseconds the "Saved!" confirmation stays on the button.
    pub const SAVED_FLASH_MS: u32 = 2000;

    #[must_use]
    pub fn is_on(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::EmailNotifications => self.email_notifications,
            Toggle::InsightAlerts => self.insight_alerts,
            Toggle::ConnectionAlerts => self.connection_alerts,
            Toggle::WeeklyDigest => self.weekly_digest,
            Toggle::TwoFactor => self.two_factor,
        }
    }

    pub fn flip(&mut self, toggle: Toggle) {
        let slot = match toggle {
            Toggle::EmailNotifications => &mut self.email_notifications,
            Toggle::InsightAlerts => &mut self.insight_alerts,
            Toggle::ConnectionAlerts => &mut self.connection_alerts,
            Toggle::WeeklyDigest => &mut self.weekly_digest,
            Toggle::TwoFactor => &mut self.two_factor,
        };
        *slot = !*slot;
        self.saved = false;
    }

    pub fn set_company_name(&mut self, value: String) {
        self.company_name = value;
        self.saved = false;
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.saved = false;
    }

    pub fn set_sync_frequency(&mut self, value: SyncFrequency) {
        self.sync_frequency = value;
        self.saved = false;
    }

    pub fn save(&mut self) {
        self.saved = true;
    }

    pub fn clear_saved(&mut self) {
        self.saved = false;
    }
}
