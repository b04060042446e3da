use crate::shared::icons::icon;
use contracts::shared::list_query::STATUS_ALL;
use leptos::prelude::*;

/// Строка поиска + выпадающий фильтр статуса
#[component]
pub fn FilterBar(
    #[prop(into)]
    search: Signal<String>,

    #[prop(into)]
    status: Signal<String>,

    /// `(key, label)` пары статусов коллекции
    status_options: Vec<(&'static str, &'static str)>,

    on_search: Callback<String>,

    on_status: Callback<String>,

    /// Есть ли активные фильтры (для кнопки сброса)
    #[prop(into)]
    is_filtered: Signal<bool>,

    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <div class="filter-bar__search">
                {icon("search")}
                <input
                    type="text"
                    class="filter-bar__input"
                    placeholder="Search…"
                    prop:value=move || search.get()
                    on:input=move |ev| on_search.run(event_target_value(&ev))
                />
            </div>
            <select
                class="filter-bar__select"
                prop:value=move || status.get()
                on:change=move |ev| on_status.run(event_target_value(&ev))
            >
                <option value=STATUS_ALL>"All statuses"</option>
                {status_options.into_iter().map(|(key, label)| {
                    view! { <option value=key>{label}</option> }
                }).collect_view()}
            </select>
            <Show when=move || is_filtered.get()>
                <button class="button button--ghost" on:click=move |_| on_clear.run(())>
                    {icon("x")}
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
