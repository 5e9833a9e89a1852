use contracts::shared::pagination::{PageLink, PageWindow};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Page strip under a list table: summary, prev/next and numbered links.
/// Renders nothing when everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Current window over the filtered rows
    #[prop(into)]
    window: Signal<PageWindow>,
    /// Called with the 1-based page to show
    on_page_change: Callback<usize>,
) -> impl IntoView {
    move || {
        let w = window.get();
        if !w.is_visible() {
            return None;
        }
        let links = w
            .links()
            .into_iter()
            .map(|link| match link {
                PageLink::Page(page) => {
                    let class = if page == w.page {
                        "pagination-btn pagination-btn--active"
                    } else {
                        "pagination-btn"
                    };
                    view! {
                        <button class=class on:click=move |_| on_page_change.run(page)>
                            {page}
                        </button>
                    }
                    .into_any()
                }
                PageLink::Ellipsis => {
                    view! { <span class="pagination-ellipsis">"…"</span> }.into_any()
                }
            })
            .collect_view();

        Some(view! {
            <div class="pagination-controls">
                <span class="pagination-info">{w.summary()}</span>
                <div class="pagination-pages">
                    <button
                        class="pagination-btn"
                        disabled=!w.has_prev()
                        title="Previous page"
                        on:click=move |_| on_page_change.run(w.page - 1)
                    >
                        {icon("chevron-left")}
                    </button>
                    {links}
                    <button
                        class="pagination-btn"
                        disabled=!w.has_next()
                        title="Next page"
                        on:click=move |_| on_page_change.run(w.page + 1)
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>
        })
    }
}
