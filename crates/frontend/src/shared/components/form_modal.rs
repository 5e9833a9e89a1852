use leptos::prelude::*;
use thaw::*;

use crate::shared::modal::Modal;

/// Modal holding a record form, with Cancel and a submit button in the
/// footer. Enter inside an input submits as well.
#[component]
pub fn FormModal(
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    submit_label: Signal<String>,
    #[prop(into)]
    busy: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
    #[prop(optional)]
    wide: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <Modal
            title=title
            on_close=on_close
            wide=wide
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=busy
                    on_click=move |_| on_close.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=busy
                    loading=busy
                    on_click=move |_| on_submit.run(())
                >
                    {move || submit_label.get()}
                </Button>
            }
        >
            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    if !busy.get_untracked() {
                        on_submit.run(());
                    }
                }
            >
                {children()}
                <button type="submit" class="form__hidden-submit" tabindex="-1"></button>
            </form>
        </Modal>
    }
}
