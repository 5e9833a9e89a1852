//! Application shell: the auth gate and the main layout behind it.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::verify_code::VerifyCodePage;
use leptos::prelude::*;

/// Sidebar plus one mounted page per open tab.
///
/// Restores the active tab from `?active=...` on creation.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }.into_any()
            }
        />
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Loading,
    Main,
    Verify,
    Login,
}

/// Auth gate. Signed-in users never see the login or verify screens and
/// guests never see the layout.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let screen = Memo::new(move |_| {
        auth_state.with(|s| match (s.is_authenticated(), s.checked) {
            (true, true) => Screen::Main,
            (true, false) => Screen::Loading,
            (false, _) if s.pending_user_id.is_some() => Screen::Verify,
            (false, _) => Screen::Login,
        })
    });

    move || match screen.get() {
        Screen::Loading => view! {
            <div class="app-loading">
                <thaw::Spinner />
                <span>"Loading..."</span>
            </div>
        }
        .into_any(),
        Screen::Main => view! { <MainLayout /> }.into_any(),
        Screen::Verify => view! { <VerifyCodePage /> }.into_any(),
        Screen::Login => view! { <LoginPage /> }.into_any(),
    }
}
