use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notify::{Notifier, ToastHost};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Tabs and sidebar state for the whole app
    provide_context(AppGlobalContext::new());

    // Toasts can be raised from any page
    provide_context(Notifier::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppShell />
                <ToastHost />
            </AuthProvider>
        </ConfigProvider>
    }
}
