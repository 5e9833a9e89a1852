use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let is_open = move || tabs_store.left_open.get();

    view! {
        <aside data-zone="left" class="app-sidebar" class:app-sidebar--collapsed=move || !is_open()>
            {children()}
        </aside>
    }
}
