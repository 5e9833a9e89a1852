use contracts::shared::format::format_number;
use contracts::shared::status::Tone;
use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Count to show (None = still loading)
    #[prop(into)]
    value: Signal<Option<usize>>,
    /// Visual tone of the card
    #[prop(optional, into)]
    tone: MaybeProp<Tone>,
    /// Optional caption below the value
    #[prop(optional, into)]
    description: MaybeProp<String>,
) -> impl IntoView {
    let tone_class = move || match tone.get() {
        Some(Tone::Success) => "stat-card stat-card--success",
        Some(Tone::Error) => "stat-card stat-card--error",
        Some(Tone::Warning) | Some(Tone::Orange) => "stat-card stat-card--warning",
        Some(Tone::Primary) | Some(Tone::Info) => "stat-card stat-card--primary",
        Some(Tone::Violet) | Some(Tone::Teal) => "stat-card stat-card--accent",
        Some(Tone::Neutral) | None => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_number(Some(v as f64)),
        None => "…".to_string(),
    };

    view! {
        <div class=tone_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || description.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
