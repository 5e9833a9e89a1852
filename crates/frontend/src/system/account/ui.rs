use contracts::system::account::{PasswordForm, ProfileUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::ui::Input;
use crate::shared::forms::{field, submit, Failure, FormErrors};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::account::api::{update_account, PASSWORD_FAILED, PROFILE_FAILED};
use crate::system::auth::context::{refresh_user, use_auth};

#[component]
fn SettingsCard(
    icon_name: &'static str,
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="settings-card">
            <header class="settings-card__header">
                <div class="settings-card__icon">{icon(icon_name)}</div>
                <div>
                    <p class="settings-card__title">{title}</p>
                    <p class="settings-card__subtitle">{subtitle}</p>
                </div>
            </header>
            <div class="settings-card__body">{children()}</div>
        </section>
    }
}

/// Self-service profile and password page, open to every signed-in user.
#[component]
pub fn AccountSettingsPage() -> impl IntoView {
    let notifier = use_notifier();
    let (auth_state, set_auth_state) = use_auth();

    let profile = RwSignal::new(ProfileUpdate {
        name: String::new(),
        email: String::new(),
    });
    let profile_errors = FormErrors::new();
    let profile_busy = RwSignal::new(false);
    let profile_ready = RwSignal::new(false);

    let password = RwSignal::new(PasswordForm::default());
    let password_errors = FormErrors::new();
    let password_busy = RwSignal::new(false);

    // Prefill once; later session refreshes must not overwrite typing.
    Effect::new(move |_| {
        if profile_ready.get_untracked() {
            return;
        }
        if let Some(user) = auth_state.with(|s| s.user.clone()) {
            profile.set(ProfileUpdate {
                name: user.name,
                email: user.email,
            });
            profile_ready.set(true);
        }
    });

    let save_profile = move || {
        let payload = profile.get_untracked();
        profile_busy.set(true);
        spawn_local(async move {
            let success = "Profile updated successfully.".to_string();
            let request = update_account(&payload);
            if submit(request, profile_errors, notifier, success, Failure::Fixed(PROFILE_FAILED)).await {
                refresh_user(set_auth_state).await;
            }
            profile_busy.set(false);
        });
    };

    let save_password = move || {
        password_errors.clear();
        let form = password.get_untracked();
        if let Err((name, message)) = form.validate() {
            password_errors.set_one(name, message);
            return;
        }
        let (name, email) = auth_state.with_untracked(|s| {
            s.user
                .as_ref()
                .map(|u| (u.name.clone(), u.email.clone()))
                .unwrap_or_default()
        });
        let payload = form.to_update(&name, &email);
        password_busy.set(true);
        spawn_local(async move {
            let success = "Password updated successfully.".to_string();
            let request = update_account(&payload);
            if submit(request, password_errors, notifier, success, Failure::Fixed(PASSWORD_FAILED)).await {
                password.set(PasswordForm::default());
            }
            password_busy.set(false);
        });
    };

    let (name, set_name) = field(profile, |f| f.name.clone(), |f, v| f.name = v);
    let (email, set_email) = field(profile, |f| f.email.clone(), |f, v| f.email = v);
    let (current, set_current) = field(
        password,
        |f| f.current_password.clone(),
        |f, v| f.current_password = v,
    );
    let (new_password, set_new_password) =
        field(password, |f| f.password.clone(), |f, v| f.password = v);
    let (confirmation, set_confirmation) = field(
        password,
        |f| f.password_confirmation.clone(),
        |f, v| f.password_confirmation = v,
    );

    view! {
        <PageFrame page_id="account--settings" category=PAGE_CAT_SYSTEM>
            <div class="settings">
                <div class="settings__heading">
                    <h1 class="page__title">"Account Settings"</h1>
                    <p class="page__subtitle">"Manage your profile information and password."</p>
                </div>

                <SettingsCard
                    icon_name="user"
                    title="Profile Information"
                    subtitle="Update your name and email address."
                >
                    <form
                        class="form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            save_profile();
                        }
                    >
                        <Input
                            label="Full Name"
                            value=name
                            on_input=set_name
                            placeholder="Your full name"
                            required=true
                            error=profile_errors.field("name")
                        />
                        <Input
                            label="Email Address"
                            input_type="email"
                            value=email
                            on_input=set_email
                            placeholder="your@email.com"
                            required=true
                            error=profile_errors.field("email")
                        />
                        <div class="form__actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                button_type=ButtonType::Submit
                                loading=profile_busy
                            >
                                {icon("check")}
                                "Save Profile"
                            </Button>
                        </div>
                    </form>
                </SettingsCard>

                <SettingsCard
                    icon_name="lock"
                    title="Change Password"
                    subtitle="Use a strong password of at least 8 characters."
                >
                    <form
                        class="form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            save_password();
                        }
                    >
                        <Input
                            label="Current Password"
                            input_type="password"
                            value=current
                            on_input=set_current
                            autocomplete="current-password"
                            error=password_errors.field("current_password")
                        />
                        <Input
                            label="New Password"
                            input_type="password"
                            value=new_password
                            on_input=set_new_password
                            autocomplete="new-password"
                            error=password_errors.field("password")
                        />
                        <Input
                            label="Confirm New Password"
                            input_type="password"
                            value=confirmation
                            on_input=set_confirmation
                            autocomplete="new-password"
                            error=password_errors.field("password_confirmation")
                        />
                        <div class="form__actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                button_type=ButtonType::Submit
                                loading=password_busy
                            >
                                {icon("lock")}
                                "Update Password"
                            </Button>
                        </div>
                    </form>
                </SettingsCard>
            </div>
        </PageFrame>
    }
}
