//! Second factor: six single-digit inputs, a resend button with a
//! cooldown, and a way back to the login form.

use contracts::system::auth::{CODE_SENT, RESEND_FAILED, VERIFICATION_FAILED};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use super::AuthFrame;
use crate::config::config;
use crate::shared::api_client::ApiError;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::system::auth::api;
use crate::system::auth::context::{cancel_verification, complete_login, use_auth};
use crate::system::auth::otp::{verification_error, OtpEntry, OtpStep, ResendCooldown};

fn slot_id(index: usize) -> String {
    format!("otp-digit-{}", index)
}

fn focus_slot(index: usize) {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&slot_id(index)))
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok());
    if let Some(input) = input {
        let _ = input.focus();
        input.select();
    }
}

#[component]
pub fn VerifyCodePage() -> impl IntoView {
    let settings = &config().ui;
    let digit_count = settings.otp_digits;

    let otp = RwSignal::new(OtpEntry::new(digit_count));
    let cooldown = RwSignal::new(ResendCooldown::new(settings.resend_cooldown_secs));
    let (status, set_status) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let (is_resending, set_is_resending) = signal(false);

    let (auth_state, set_auth_state) = use_auth();
    let notifier = use_notifier();

    // One tick per second until the page goes away
    spawn_local(async move {
        loop {
            TimeoutFuture::new(1_000).await;
            if cooldown.try_update(|c| c.tick()).is_none() {
                break;
            }
        }
    });

    Effect::new(move |_| focus_slot(0));

    let submit_code = move |code: String| {
        let Some(user_id) = auth_state.with_untracked(|s| s.pending_user_id) else {
            cancel_verification(set_auth_state);
            return;
        };
        if is_loading.get_untracked() {
            return;
        }
        set_is_loading.set(true);
        set_status.set(None);

        spawn_local(async move {
            match api::verify_code(user_id, code).await {
                Ok(response) => {
                    set_is_loading.set(false);
                    match response.access_token.filter(|t| !t.is_empty()) {
                        Some(token) => complete_login(set_auth_state, token).await,
                        None => set_status.set(Some(VERIFICATION_FAILED.to_string())),
                    }
                }
                Err(e) => {
                    set_is_loading.set(false);
                    let text = verification_error(&e);
                    match e {
                        ApiError::Validation { .. } => otp.update(|o| o.set_error(Some(text))),
                        _ => set_status.set(Some(text)),
                    }
                }
            }
        });
    };

    let apply_step = move |step: OtpStep| {
        if let Some(index) = step.focus {
            focus_slot(index);
        }
        if let Some(code) = step.submit {
            submit_code(code);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut code = None;
        otp.update(|o| code = o.submit());
        if let Some(code) = code {
            submit_code(code);
        }
    };

    let on_resend = move |_| {
        if !cooldown.get_untracked().can_resend(is_resending.get_untracked()) {
            return;
        }
        let Some(user_id) = auth_state.with_untracked(|s| s.pending_user_id) else {
            cancel_verification(set_auth_state);
            return;
        };
        set_is_resending.set(true);
        spawn_local(async move {
            match api::resend_code(user_id).await {
                Ok(response) => {
                    notifier.success(response.message.unwrap_or_else(|| CODE_SENT.to_string()));
                    cooldown.update(|c| c.reset());
                    otp.update(|o| o.clear());
                    set_status.set(None);
                    focus_slot(0);
                }
                Err(e) => notifier.error(e.message_or(RESEND_FAILED)),
            }
            set_is_resending.set(false);
        });
    };

    let on_back = move |_| cancel_verification(set_auth_state);

    view! {
        <AuthFrame>
            <div class="auth-card__header auth-card__header--center">
                <div class="auth-card__icon">{icon("mail")}</div>
                <h2 class="auth-card__title">"Check your email"</h2>
                <p class="auth-card__subtitle">
                    {format!("Enter the {}-digit code we sent you", digit_count)}
                </p>
            </div>

            {move || status.get().map(|s| view! {
                <div class="auth-card__status auth-card__status--error">{s}</div>
            })}

            <form class="auth-card__form" on:submit=on_submit>
                <div class="otp">
                    {(0..digit_count).map(|index| view! {
                        <input
                            id=slot_id(index)
                            class="otp__digit"
                            class:otp__digit--invalid=move || otp.with(|o| o.error().is_some())
                            type="text"
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            maxlength=digit_count.to_string()
                            disabled=move || is_loading.get()
                            prop:value=move || otp.with(|o| o.slot(index).to_string())
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                let mut step = OtpStep::default();
                                otp.update(|o| step = o.input(index, &raw));
                                set_status.set(None);
                                apply_step(step);
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if let Some(target) = otp.with_untracked(|o| o.key(index, &ev.key())) {
                                    if ev.key() != "Backspace" {
                                        ev.prevent_default();
                                    }
                                    focus_slot(target);
                                }
                            }
                        />
                    }).collect_view()}
                </div>

                {move || otp.with(|o| o.error().map(str::to_string)).map(|e| view! {
                    <p class="form__error otp__error">{e}</p>
                })}

                <button
                    type="submit"
                    class="button button--primary auth-card__submit"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Verifying..." } else { "Verify Code" }}
                </button>
            </form>

            <div class="otp-resend">
                {move || {
                    let c = cooldown.get();
                    if c.is_running() {
                        view! {
                            <div class="otp-resend__cooldown">
                                <span>{format!("Resend available in {}s", c.remaining())}</span>
                                <div class="otp-resend__bar">
                                    <div
                                        class="otp-resend__progress"
                                        style:width=format!("{}%", c.progress_percent())
                                    ></div>
                                </div>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <button
                                type="button"
                                class="button button--link"
                                disabled=move || is_resending.get()
                                on:click=on_resend
                            >
                                {icon("refresh")}
                                {move || if is_resending.get() { "Sending..." } else { "Resend code" }}
                            </button>
                        }
                        .into_any()
                    }
                }}
            </div>

            <button type="button" class="button button--link auth-card__back" on:click=on_back>
                {icon("arrow-left")}
                "Back to login"
            </button>
        </AuthFrame>
    }
}
