use contracts::shared::format::format_status;
use contracts::shared::status::{tone_for, Tone};
use leptos::prelude::*;

/// Coloured pill with an explicit tone
#[component]
pub fn Badge(
    /// Badge colour
    #[prop(optional)]
    tone: Option<Tone>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let tone_class = tone.unwrap_or(Tone::Neutral).css_class();

    view! {
        <span class=format!("badge {}", tone_class)>
            {children()}
        </span>
    }
}

/// Badge for a backend status value such as `under_repair` or `fixed_asset`.
/// The label is the humanised value, the tone follows the status.
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let tone_class = tone_for(&status).css_class();
    let text = format_status(Some(&status));

    view! {
        <span class=format!("badge badge--status {}", tone_class)>
            {text}
        </span>
    }
}
