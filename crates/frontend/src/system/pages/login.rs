use contracts::system::auth::{LoginOutcome, INVALID_CREDENTIALS};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::AuthFrame;
use crate::shared::api_client::ApiError;
use crate::shared::components::ui::Input;
use crate::shared::forms::FormErrors;
use crate::system::auth::api;
use crate::system::auth::context::{begin_verification, complete_login, refresh_user, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (status, set_status) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let errors = FormErrors::new();

    let (auth_state, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_status.set(None);
        errors.clear();

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    set_is_loading.set(false);
                    match response.outcome() {
                        LoginOutcome::VerificationRequired(user_id) => {
                            log::info!("login requires a verification code");
                            begin_verification(set_auth_state, user_id);
                        }
                        LoginOutcome::Authenticated(token) => {
                            complete_login(set_auth_state, token).await;
                        }
                        LoginOutcome::NoToken => {
                            refresh_user(set_auth_state).await;
                            if !auth_state.with_untracked(|s| s.is_authenticated()) {
                                set_status.set(Some(
                                    "Signed in, but the server did not return a session token."
                                        .to_string(),
                                ));
                            }
                        }
                    }
                }
                Err(e) => {
                    set_is_loading.set(false);
                    if errors.absorb(&e) {
                        return;
                    }
                    let message = match e {
                        ApiError::Unauthorized => INVALID_CREDENTIALS.to_string(),
                        other => other.message_or("Login failed. Please try again."),
                    };
                    set_status.set(Some(message));
                }
            }
        });
    };

    view! {
        <AuthFrame>
            <div class="auth-card__header">
                <h2 class="auth-card__title">"Welcome back"</h2>
                <p class="auth-card__subtitle">"Sign in to your account to continue"</p>
            </div>

            {move || status.get().map(|s| view! {
                <div class="auth-card__status auth-card__status--error">{s}</div>
            })}

            <form class="auth-card__form" on:submit=on_submit>
                <Input
                    id="login-email"
                    label="Email Address"
                    input_type="email"
                    value=email
                    on_input=Callback::new(move |v| set_email.set(v))
                    placeholder="admin@inventory.com"
                    autocomplete="email"
                    required=true
                    disabled=is_loading
                    error=errors.field("email")
                />
                <Input
                    id="login-password"
                    label="Password"
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |v| set_password.set(v))
                    placeholder="••••••••"
                    autocomplete="current-password"
                    required=true
                    disabled=is_loading
                    error=errors.field("password")
                />
                <button
                    type="submit"
                    class="button button--primary auth-card__submit"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </AuthFrame>
    }
}
