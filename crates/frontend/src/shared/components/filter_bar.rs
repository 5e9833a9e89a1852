use leptos::prelude::*;

use crate::shared::icons::icon;

/// Search box plus an optional filter select, shown above every list table.
#[component]
pub fn FilterBar(
    #[prop(into)]
    search: Signal<String>,
    on_search: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Current filter value; the select is only rendered with `filter_options`
    #[prop(optional, into)]
    filter: MaybeProp<String>,
    #[prop(optional, into)]
    filter_options: MaybeProp<Vec<(String, String)>>,
    #[prop(optional)]
    on_filter: Option<Callback<String>>,
) -> impl IntoView {
    let placeholder = move || placeholder.get().unwrap_or_else(|| "Search...".to_string());

    view! {
        <div class="filter-panel">
            <div class="filter-panel__search">
                {icon("search")}
                <input
                    type="search"
                    class="form__input filter-panel__input"
                    placeholder=placeholder
                    prop:value=move || search.get()
                    on:input=move |ev| on_search.run(event_target_value(&ev))
                />
            </div>
            {move || filter_options.get().map(|options| {
                let current = filter.get().unwrap_or_default();
                view! {
                    <div class="filter-panel__filter">
                        {icon("filter")}
                        <select
                            class="form__select"
                            on:change=move |ev| {
                                if let Some(handler) = on_filter {
                                    handler.run(event_target_value(&ev));
                                }
                            }
                        >
                            {options.into_iter().map(|(value, label)| {
                                let selected = value == current;
                                view! { <option value=value selected=selected>{label}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                }
            })}
        </div>
    }
}
