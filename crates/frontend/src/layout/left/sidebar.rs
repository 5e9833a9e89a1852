//! Sidebar with collapsible menu groups built from the user's permissions.

use contracts::system::permissions::visible_groups;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_icon, tab_label_for_key, DASHBOARD_TAB};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

fn group_icon(label: &str) -> &'static str {
    match label {
        "Administration" => "settings",
        "Catalog" => "tag",
        "Fixed Assets" => "monitor",
        "Consumable Stock" => "package",
        _ => "layers",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    // All groups start expanded
    let collapsed_groups = RwSignal::new(Vec::<&'static str>::new());

    let groups = move || auth_state.with(|state| visible_groups(state.user.as_ref()));

    let is_active = move |key: &'static str| ctx.active.get().as_deref() == Some(key);

    view! {
        <nav class="app-sidebar__content">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || is_active(DASHBOARD_TAB)
                on:click=move |_| ctx.open_tab(DASHBOARD_TAB, tab_label_for_key(DASHBOARD_TAB))
            >
                <div class="app-sidebar__item-content">
                    {icon(tab_icon(DASHBOARD_TAB))}
                    <span>{tab_label_for_key(DASHBOARD_TAB)}</span>
                </div>
            </div>

            {move || groups().into_iter().map(|(label, items)| {
                let is_expanded = move || !collapsed_groups.get().contains(&label);
                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item app-sidebar__group-title"
                            on:click=move |_| collapsed_groups.update(|groups| {
                                if let Some(pos) = groups.iter().position(|g| *g == label) {
                                    groups.remove(pos);
                                } else {
                                    groups.push(label);
                                }
                            })
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group_icon(label))}
                                <span>{label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.iter().map(|item| {
                                    let key = item.key;
                                    let item_label = item.label;
                                    view! {
                                        <div
                                            class="app-sidebar__item app-sidebar__item--child"
                                            class:app-sidebar__item--active=move || is_active(key)
                                            on:click=move |_| ctx.open_tab(key, item_label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(tab_icon(key))}
                                                <span>{item_label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
