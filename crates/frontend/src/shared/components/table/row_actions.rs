use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Edit and delete buttons in the last column of a row.
#[component]
pub fn RowActions(
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    /// Delete is shown but cannot be clicked
    #[prop(optional)]
    delete_disabled: bool,
    /// Tooltip of the delete button
    #[prop(optional, into)]
    delete_title: MaybeProp<String>,
    /// Extra buttons placed before edit
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let delete_title = move || delete_title.get().unwrap_or_else(|| "Delete".to_string());

    view! {
        <TableCell>
            <div class="table__actions">
                {children.map(|c| c())}
                <button class="button button--icon" title="Edit" on:click=move |_| on_edit.run(())>
                    {icon("edit")}
                </button>
                <button
                    class="button button--icon button--icon-danger"
                    title=delete_title
                    disabled=delete_disabled
                    on:click=move |_| on_delete.run(())
                >
                    {icon("trash")}
                </button>
            </div>
        </TableCell>
    }
}
