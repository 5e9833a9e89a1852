use leptos::prelude::*;

/// Inline validation message rendered under a form control.
#[component]
pub fn FieldError(#[prop(into)] error: MaybeProp<String>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <span class="form__error">{message}</span> })
    }
}
