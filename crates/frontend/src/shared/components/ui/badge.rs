use contracts::shared::badge::Badge as BadgeData;
use leptos::prelude::*;

/// Бейдж статуса / приоритета / роли. Цвет задаётся тоном.
#[component]
pub fn Badge(
    badge: BadgeData,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let tone_class = badge.tone.css_class();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", tone_class, additional_class())>
            {badge.label}
        </span>
    }
}
