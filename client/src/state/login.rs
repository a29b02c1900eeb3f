//! Login modal form state.
//!
//! DESIGN
//! ======
//! Validation happens locally before any identity call. The modal drives the
//! async call itself and feeds the result back through `finish_*` methods so
//! the mode transitions stay testable without a network.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

pub const MIN_PASSWORD_LEN: usize = 6;

pub const SIGN_UP_CONFIRM_MESSAGE: &str = "Account created! Please check your email to confirm, then sign in.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
    Reset,
    ResetSent,
}

impl LoginMode {
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome back",
            Self::SignUp => "Create your account",
            Self::Reset => "Reset password",
            Self::ResetSent => "Check your email",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
            Self::Reset | Self::ResetSent => "Send Reset Link",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

/// Inline banner above the form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }
}

/// A validated request ready for the identity client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginRequest {
    SignIn { email: String, password: String },
    SignUp { email: String, password: String, display_name: String },
    Reset { email: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub mode: LoginMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub show_password: bool,
    pub busy: bool,
    pub message: Option<FormMessage>,
}

impl LoginForm {
    /// Check the fields for the current mode and build the request.
    ///
    /// # Errors
    ///
    /// Returns the message to show inline when a field is missing or short.
    pub fn validate(&self) -> Result<LoginRequest, String> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Please enter your email".to_owned());
        }
        if matches!(self.mode, LoginMode::Reset | LoginMode::ResetSent) {
            return Ok(LoginRequest::Reset { email: email.to_owned() });
        }
        if self.password.is_empty() {
            return Err("Please enter your password".to_owned());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
        }
        let email = email.to_owned();
        let password = self.password.clone();
        Ok(match self.mode {
            LoginMode::SignUp => {
                let name = self.name.trim();
                let display_name = if name.is_empty() {
                    email.split('@').next().unwrap_or_default().to_owned()
                } else {
                    name.to_owned()
                };
                LoginRequest::SignUp { email, password, display_name }
            }
            _ => LoginRequest::SignIn { email, password },
        })
    }

    /// Validate and mark the form busy. On failure the message is set instead.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        self.message = None;
        match self.validate() {
            Ok(request) => {
                self.busy = true;
                Some(request)
            }
            Err(text) => {
                self.message = Some(FormMessage::error(text));
                None
            }
        }
    }

    pub fn switch_mode(&mut self, mode: LoginMode) {
        self.mode = mode;
        self.message = None;
    }

    /// Toggle between sign-in and sign-up.
    pub fn toggle_sign_up(&mut self) {
        let next = if self.mode == LoginMode::SignIn { LoginMode::SignUp } else { LoginMode::SignIn };
        self.switch_mode(next);
    }

    /// Return to sign-in with all fields cleared.
    pub fn back_to_sign_in(&mut self) {
        *self = Self::default();
    }

    pub fn fail(&mut self, text: impl Into<String>) {
        self.busy = false;
        self.message = Some(FormMessage::error(text));
    }

    pub fn finish_reset(&mut self) {
        self.busy = false;
        self.mode = LoginMode::ResetSent;
    }

    /// Sign-up returned no session: the address needs confirming first.
    pub fn finish_sign_up_pending(&mut self) {
        self.busy = false;
        self.mode = LoginMode::SignIn;
        self.password.clear();
        self.message = Some(FormMessage::success(SIGN_UP_CONFIRM_MESSAGE));
    }

    /// A session was issued; the modal is about to close.
    pub fn finish_signed_in(&mut self) {
        *self = Self::default();
    }
}
