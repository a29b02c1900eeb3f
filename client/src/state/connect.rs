//! Simulated accounting-system connection flow.
//!
//! The panel owns the timers; this type only tracks which step is showing.
//! Each step lasts `STEP_DELAY_MS`, and a sync takes `SYNC_DELAY_MS`.

#[cfg(test)]
#[path = "connect_test.rs"]
mod connect_test;

pub const STEP_DELAY_MS: u32 = 1500;
pub const SYNC_DELAY_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConnectStep {
    #[default]
    Idle,
    Authorizing,
    Authenticating,
    StoringTokens,
}

impl ConnectStep {
    /// Steps shown in the progress list, in order.
    pub const PROGRESS: [Self; 3] = [Self::Authorizing, Self::Authenticating, Self::StoringTokens];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Authorizing => "Initiating OAuth Authorization",
            Self::Authenticating => "Authenticating with Intuit",
            Self::StoringTokens => "Storing Secure Tokens",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Idle => Self::Authorizing,
            Self::Authorizing => Self::Authenticating,
            Self::Authenticating => Self::StoringTokens,
            Self::StoringTokens => Self::Idle,
        }
    }
}

/// Progress marker for one row of the step list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Done,
    Active,
    Waiting,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectionFlow {
    pub step: ConnectStep,
    pub syncing: bool,
}

impl ConnectionFlow {
    #[must_use]
    pub fn connecting(&self) -> bool {
        self.step != ConnectStep::Idle
    }

    /// Begin the handshake. Returns `false` if one is already running.
    pub fn start(&mut self) -> bool {
        if self.connecting() {
            return false;
        }
        self.step = ConnectStep::Authorizing;
        true
    }

    /// Move to the next step. Returns `true` once the last step finishes,
    /// at which point the caller marks the client connected.
    pub fn advance(&mut self) -> bool {
        if !self.connecting() {
            return false;
        }
        self.step = self.step.next();
        self.step == ConnectStep::Idle
    }

    #[must_use]
    pub fn step_state(&self, row: ConnectStep) -> StepState {
        if self.step > row {
            StepState::Done
        } else if self.step == row {
            StepState::Active
        } else {
            StepState::Waiting
        }
    }

    /// Begin a sync. Returns `false` if one is already running.
    pub fn start_sync(&mut self) -> bool {
        if self.syncing {
            return false;
        }
        self.syncing = true;
        true
    }

    pub fn finish_sync(&mut self) {
        self.syncing = false;
    }
}
