//! Sign-in / sign-up / password-reset modal.
//!
//! ARCHITECTURE
//! ============
//! Field state and mode transitions live in `state::login::LoginForm`; this
//! component renders it and runs the identity call for a validated request.
//! On a fresh session it applies `Intent::LoginCompleted`, which closes the
//! modal and greets the user.

use leptos::prelude::*;

use crate::components::brand::Brand;
use crate::net::identity::IdentityClient;
use crate::state::app::{AppState, Intent, dispatch};
use crate::state::login::{LoginForm, LoginMode, MessageKind};

#[component]
pub fn LoginModal() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let identity = StoredValue::new(expect_context::<IdentityClient>());
    let form = RwSignal::new(LoginForm::default());

    let open = move || app.with(|s| s.login_prompt_open);
    let mode = Memo::new(move |_| form.with(|f| f.mode));
    let busy = move || form.with(|f| f.busy);

    let close = move || {
        form.set(LoginForm::default());
        dispatch(app, Intent::CloseLogin);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.busy) {
            return;
        }
        let mut request = None;
        form.update(|f| request = f.begin_submit());
        let Some(request) = request else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(run_request(identity.get_value(), app, form, request));

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, identity);
            form.update(|f| f.fail(crate::net::identity::AuthError::Unavailable.user_message()));
        }
    };

    let subtitle = move || match mode.get() {
        LoginMode::SignIn => "Sign in to access your financial dashboard".to_owned(),
        LoginMode::SignUp => "Start your 14-day free trial".to_owned(),
        LoginMode::Reset => "Enter your email to receive a reset link".to_owned(),
        LoginMode::ResetSent => form.with(|f| format!("We sent a password reset link to {}", f.email.trim())),
    };

    let message_class = move || {
        form.with(|f| match f.message.as_ref().map(|m| m.kind) {
            Some(MessageKind::Success) => "login-modal__message login-modal__message--success",
            _ => "login-modal__message login-modal__message--error",
        })
    };

    view! {
        <Show when=open>
            <div class="login-modal__backdrop">
                <div class="login-modal" role="dialog" aria-modal="true">
                    <div class="login-modal__header">
                        <button class="login-modal__close" on:click=move |_| close() title="Close">
                            "✕"
                        </button>
                        <Brand/>
                        <h2 class="login-modal__title">{move || mode.get().heading()}</h2>
                        <p class="login-modal__subtitle">{subtitle}</p>
                    </div>

                    <Show
                        when={move || mode.get() != LoginMode::ResetSent}
                        fallback=move || {
                            view! {
                                <div class="login-modal__body login-modal__body--sent">
                                    <div class="login-modal__sent-icon">"✓"</div>
                                    <p class="login-modal__sent-text">
                                        "If an account exists for "
                                        <strong>{move || form.with(|f| f.email.trim().to_owned())}</strong>
                                        ", you'll receive a password reset link shortly."
                                    </p>
                                    <button
                                        class="login-modal__secondary"
                                        on:click=move |_| form.update(LoginForm::back_to_sign_in)
                                    >
                                        "◀ Back to Sign In"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <form class="login-modal__body" on:submit=on_submit>
                            <Show when=move || form.with(|f| f.message.is_some())>
                                <div class=message_class>
                                    {move || form.with(|f| f.message.as_ref().map(|m| m.text.clone()).unwrap_or_default())}
                                </div>
                            </Show>

                            <Show when={move || mode.get() == LoginMode::SignUp}>
                                <label class="login-modal__field">
                                    <span class="login-modal__label">"Full Name"</span>
                                    <input
                                        class="login-modal__input"
                                        type="text"
                                        placeholder="John Smith"
                                        prop:value=move || form.with(|f| f.name.clone())
                                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                    />
                                </label>
                            </Show>

                            <label class="login-modal__field">
                                <span class="login-modal__label">"Email"</span>
                                <input
                                    class="login-modal__input"
                                    type="email"
                                    placeholder="you@company.com"
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                />
                            </label>

                            <Show when={move || mode.get() != LoginMode::Reset}>
                                <label class="login-modal__field">
                                    <span class="login-modal__label">"Password"</span>
                                    <span class="login-modal__password">
                                        <input
                                            class="login-modal__input"
                                            type=move || if form.with(|f| f.show_password) { "text" } else { "password" }
                                            placeholder=move || {
                                                if mode.get() == LoginMode::SignUp { "Min 6 characters" } else { "Enter your password" }
                                            }
                                            prop:value=move || form.with(|f| f.password.clone())
                                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                        />
                                        <button
                                            type="button"
                                            class="login-modal__reveal"
                                            title="Show password"
                                            on:click=move |_| form.update(|f| f.show_password = !f.show_password)
                                        >
                                            {move || if form.with(|f| f.show_password) { "Hide" } else { "Show" }}
                                        </button>
                                    </span>
                                </label>
                            </Show>

                            <Show when={move || mode.get() == LoginMode::SignIn}>
                                <div class="login-modal__forgot">
                                    <button
                                        type="button"
                                        class="login-modal__link"
                                        on:click=move |_| form.update(|f| f.switch_mode(LoginMode::Reset))
                                    >
                                        "Forgot password?"
                                    </button>
                                </div>
                            </Show>

                            <button class="login-modal__submit" type="submit" disabled=busy>
                                {move || if busy() { "Please wait...".to_owned() } else { format!("{} →", mode.get().submit_label()) }}
                            </button>

                            <Show
                                when={move || mode.get() == LoginMode::Reset}
                                fallback=move || {
                                    view! {
                                        <p class="login-modal__switch">
                                            {move || {
                                                if mode.get() == LoginMode::SignIn { "Don't have an account? " } else { "Already have an account? " }
                                            }}
                                            <button
                                                type="button"
                                                class="login-modal__link"
                                                on:click=move |_| form.update(LoginForm::toggle_sign_up)
                                            >
                                                {move || if mode.get() == LoginMode::SignIn { "Sign up free" } else { "Sign in" }}
                                            </button>
                                        </p>
                                    }
                                }
                            >
                                <p class="login-modal__switch">
                                    <button
                                        type="button"
                                        class="login-modal__link"
                                        on:click=move |_| form.update(|f| f.switch_mode(LoginMode::SignIn))
                                    >
                                        "◀ Back to Sign In"
                                    </button>
                                </p>
                            </Show>
                        </form>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

/// Run one validated request against the identity provider and feed the
/// result back into the form (and, on a new session, into `AppState`).
#[cfg(feature = "hydrate")]
async fn run_request(
    identity: IdentityClient,
    app: RwSignal<AppState>,
    form: RwSignal<LoginForm>,
    request: crate::state::login::LoginRequest,
) {
    use crate::net::identity::SignUpOutcome;
    use crate::state::login::LoginRequest;

    let signed_in = move || {
        form.update(LoginForm::finish_signed_in);
        dispatch(app, Intent::LoginCompleted);
    };

    match request {
        LoginRequest::SignIn { email, password } => match identity.sign_in_with_password(&email, &password).await {
            Ok(_) => signed_in(),
            Err(e) => form.update(|f| f.fail(e.user_message())),
        },
        LoginRequest::SignUp { email, password, display_name } => {
            match identity.sign_up(&email, &password, &display_name).await {
                Ok(SignUpOutcome::SignedIn(_)) => signed_in(),
                Ok(SignUpOutcome::ConfirmationRequired) => form.update(LoginForm::finish_sign_up_pending),
                Err(e) => form.update(|f| f.fail(e.user_message())),
            }
        }
        LoginRequest::Reset { email } => {
            let redirect_to = crate::util::dom::location_origin();
            match identity.request_password_reset(&email, &redirect_to).await {
                Ok(()) => form.update(LoginForm::finish_reset),
                Err(e) => {
                    leptos::logging::warn!("password reset failed: {e}");
                    form.update(|f| f.fail(e.user_message()));
                }
            }
        }
    }
}
