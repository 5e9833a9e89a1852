pub mod tab;

use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use tab::Tab;

/// Row of open tabs above the page content.
#[component]
pub fn TabStrip() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs__strip" role="tablist">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| view! { <Tab tab=tab /> }
            />
        </div>
    }
}
