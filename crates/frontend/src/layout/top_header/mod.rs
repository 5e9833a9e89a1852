//! TopHeader: application title, sidebar toggle, current user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, ACCOUNT_TAB};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let open_account = move |_| {
        ctx.open_tab(ACCOUNT_TAB, tab_label_for_key(ACCOUNT_TAB));
    };

    let logout = move |_| {
        ctx.reset();
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let user = move || auth_state.with(|s| s.user.clone().unwrap_or_default());

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                {icon("package")}
                <span class="top-header__title">"Inventory Management"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__user" title="Account settings" on:click=open_account>
                    <span class="top-header__avatar">{move || user().initials()}</span>
                    <span class="top-header__user-text">
                        <span class="top-header__user-name">
                            {move || user().display_name().to_string()}
                        </span>
                        <span class="top-header__user-role">{move || user().role_label()}</span>
                    </span>
                </button>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
