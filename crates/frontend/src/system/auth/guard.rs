use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for system administrators.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated() && s.is_admin())
            fallback=|| view! {
                <div class="access-denied">
                    <h2 class="access-denied__title">"Access Denied"</h2>
                    <p class="access-denied__text">
                        "Only system administrators can manage user accounts."
                    </p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

/// Renders children only when the user holds the page permission.
#[component]
pub fn RequirePermission(key: &'static str, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.can_access(Some(key)))
            fallback=|| view! {
                <div class="access-denied">
                    <h2 class="access-denied__title">"Access Denied"</h2>
                    <p class="access-denied__text">"You do not have permission to view this page."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
