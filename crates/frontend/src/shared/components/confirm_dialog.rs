use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Delete confirmation. Both buttons are disabled while `busy` is set.
#[component]
pub fn ConfirmDialog(
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    message: MaybeProp<String>,
    #[prop(optional, into)]
    confirm_label: MaybeProp<String>,
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || title.get().unwrap_or_else(|| "Confirm Delete".to_string()));
    let message = move || {
        message.get().unwrap_or_else(|| {
            "Are you sure you want to delete this record? This action cannot be undone.".to_string()
        })
    };
    let confirm_label = move || confirm_label.get().unwrap_or_else(|| "Delete".to_string());

    view! {
        <Modal
            title=title
            on_close=on_cancel
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=busy
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    class="button--danger"
                    disabled=busy
                    loading=busy
                    on_click=move |_| on_confirm.run(())
                >
                    {move || if busy.get() { "Deleting...".to_string() } else { confirm_label() }}
                </Button>
            }
        >
            <div class="confirm-dialog">
                <span class="confirm-dialog__icon">{icon("alert-triangle")}</span>
                <p class="confirm-dialog__message">{message}</p>
            </div>
        </Modal>
    }
}
