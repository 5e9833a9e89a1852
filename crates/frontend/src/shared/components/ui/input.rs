use leptos::prelude::*;

use super::FieldError;

/// Input component with label and inline error support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", "number", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Step for numeric inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// Lower bound for numeric inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Validation message shown under the input
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let invalid_class = move || {
        if error.get().is_some() {
            "form__input--invalid"
        } else {
            ""
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <input
                id=input_id
                class=move || format!("form__input {} {}", invalid_class(), additional_class())
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                step=move || step.get()
                min=move || min.get()
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                autocomplete=input_autocomplete
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <FieldError error=error />
        </div>
    }
}
