use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Full-width row shown when a list has nothing to display.
#[component]
pub fn TableEmptyRow(
    /// Number of columns the row spans
    colspan: u32,
    /// Still fetching: show a loading line instead of the empty state
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell attr:colspan=colspan.to_string()>
                {move || if loading.get() {
                    view! {
                        <div class="table-empty">
                            <Spinner />
                            <span>"Loading..."</span>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="table-empty">
                            {icon("inbox")}
                            <div class="table-empty__title">"No records found"</div>
                            <div class="table-empty__hint">"Try adjusting your search or filters"</div>
                        </div>
                    }.into_any()
                }}
            </TableCell>
        </TableRow>
    }
}
