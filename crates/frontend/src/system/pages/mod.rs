pub mod login;
pub mod verify_code;

use leptos::prelude::*;

use crate::shared::date_utils::current_year;
use crate::shared::icons::icon;

/// Brand panel and card frame shared by the login and verify screens.
#[component]
pub fn AuthFrame(children: Children) -> impl IntoView {
    view! {
        <div class="auth-screen">
            <div class="auth-screen__brand">
                <div class="auth-screen__logo">{icon("package")}</div>
                <h1 class="auth-screen__title">"Asset"</h1>
                <p class="auth-screen__subtitle">"Management System"</p>
                <ul class="auth-screen__features">
                    <li>{icon("dashboard")}<span>"Real-time dashboard insights"</span></li>
                    <li>{icon("package")}<span>"Department-scoped inventory tracking"</span></li>
                    <li>{icon("users")}<span>"Role-based access control"</span></li>
                </ul>
            </div>
            <div class="auth-screen__panel">
                <div class="auth-card">
                    {children()}
                </div>
                <p class="auth-screen__footer">
                    {format!("Inventory Management System © {}", current_year())}
                </p>
            </div>
        </div>
    }
}
