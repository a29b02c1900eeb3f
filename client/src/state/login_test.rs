use super::*;

fn form(mode: LoginMode, email: &str, password: &str) -> LoginForm {
    LoginForm { mode, email: email.into(), password: password.into(), ..LoginForm::default() }
}

#[test]
fn empty_email_is_rejected_in_every_mode() {
    for mode in [LoginMode::SignIn, LoginMode::SignUp, LoginMode::Reset] {
        assert_eq!(form(mode, "  ", "secret1").validate(), Err("Please enter your email".to_owned()));
    }
}

#[test]
fn reset_needs_only_email() {
    assert_eq!(
        form(LoginMode::Reset, "a@b.test", "").validate(),
        Ok(LoginRequest::Reset { email: "a@b.test".into() })
    );
}

#[test]
fn missing_password_is_rejected() {
    assert_eq!(form(LoginMode::SignIn, "a@b.test", "").validate(), Err("Please enter your password".to_owned()));
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        form(LoginMode::SignUp, "a@b.test", "12345").validate(),
        Err("Password must be at least 6 characters".to_owned())
    );
}

#[test]
fn sign_in_request_carries_credentials() {
    assert_eq!(
        form(LoginMode::SignIn, " a@b.test ", "123456").validate(),
        Ok(LoginRequest::SignIn { email: "a@b.test".into(), password: "123456".into() })
    );
}

#[test]
fn sign_up_defaults_display_name_to_email_local_part() {
    let request = form(LoginMode::SignUp, "ana@b.test", "123456").validate();
    assert_eq!(
        request,
        Ok(LoginRequest::SignUp { email: "ana@b.test".into(), password: "123456".into(), display_name: "ana".into() })
    );
}

#[test]
fn sign_up_uses_entered_name() {
    let mut f = form(LoginMode::SignUp, "ana@b.test", "123456");
    f.name = "Ana Ruiz".into();
    let Ok(LoginRequest::SignUp { display_name, .. }) = f.validate() else {
        panic!("expected sign-up request");
    };
    assert_eq!(display_name, "Ana Ruiz");
}

#[test]
fn begin_submit_sets_error_without_going_busy() {
    let mut f = form(LoginMode::SignIn, "", "");
    assert!(f.begin_submit().is_none());
    assert!(!f.busy);
    assert_eq!(f.message, Some(FormMessage::error("Please enter your email")));
}

#[test]
fn begin_submit_clears_message_and_goes_busy() {
    let mut f = form(LoginMode::SignIn, "a@b.test", "123456");
    f.message = Some(FormMessage::error("old"));
    assert!(f.begin_submit().is_some());
    assert!(f.busy);
    assert!(f.message.is_none());
}

#[test]
fn switch_mode_clears_message() {
    let mut f = form(LoginMode::SignIn, "a@b.test", "");
    f.message = Some(FormMessage::error("x"));
    f.toggle_sign_up();
    assert_eq!(f.mode, LoginMode::SignUp);
    assert!(f.message.is_none());
    f.toggle_sign_up();
    assert_eq!(f.mode, LoginMode::SignIn);
}

#[test]
fn sign_up_without_session_returns_to_sign_in_with_success_message() {
    let mut f = form(LoginMode::SignUp, "a@b.test", "123456");
    f.busy = true;
    f.finish_sign_up_pending();
    assert_eq!(f.mode, LoginMode::SignIn);
    assert!(f.password.is_empty());
    assert!(!f.busy);
    assert_eq!(f.message, Some(FormMessage::success(SIGN_UP_CONFIRM_MESSAGE)));
    assert_eq!(f.email, "a@b.test");
}

#[test]
fn finish_reset_moves_to_sent() {
    let mut f = form(LoginMode::Reset, "a@b.test", "");
    f.busy = true;
    f.finish_reset();
    assert_eq!(f.mode, LoginMode::ResetSent);
    assert!(!f.busy);
}

#[test]
fn fail_shows_error_and_clears_busy() {
    let mut f = form(LoginMode::SignIn, "a@b.test", "123456");
    f.busy = true;
    f.fail("Invalid email or password. Please try again.");
    assert!(!f.busy);
    assert_eq!(f.message.map(|m| m.kind), Some(MessageKind::Error));
}

#[test]
fn back_to_sign_in_resets_fields() {
    let mut f = form(LoginMode::ResetSent, "a@b.test", "x");
    f.back_to_sign_in();
    assert_eq!(f, LoginForm::default());
}
