use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::DASHBOARD_TAB;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        tabs_store.active.get().as_deref() == Some(key.get_value().as_str())
    });

    let on_click = move |_| tabs_store.activate_tab(&key.get_value());

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    // The dashboard stays open
    let closable = tab.key != DASHBOARD_TAB;

    view! {
        <div
            class="tabs__tab"
            class:tabs__tab--active=is_active
            role="tab"
            on:click=on_click
        >
            <span class="tabs__title">{tab.title}</span>
            {closable.then(|| view! {
                <button class="tabs__close" title="Close" on:click=on_close>
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
