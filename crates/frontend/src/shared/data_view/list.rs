use super::api;
use super::view::RecordView;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_key, detail_tab_label};
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::{range_label, PaginationControls};
use crate::shared::icons::icon;
use contracts::shared::list_query::{list_page, ListQuery, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Список коллекции: поиск, фильтр статуса, пагинация.
///
/// Коллекция загружается один раз; видимая страница пересчитывается из `ListQuery`
/// при каждом изменении фильтров.
#[component]
pub fn RecordList<T: RecordView>(
    #[prop(optional)] _marker: std::marker::PhantomData<T>,
) -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();

    let (items, set_items) = signal::<Vec<T>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let query = RwSignal::new(ListQuery::default());

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all::<T>().await {
                Ok(records) => {
                    log::debug!("{}: loaded {} records", T::full_name(), records.len());
                    set_items.set(records);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("{}: load failed: {}", T::full_name(), e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    let page: Memo<Page<T>> =
        Memo::new(move |_| items.with(|all| query.with(|q| list_page(all, q))));

    let open_detail = move |id: String| {
        let key = detail_key(&T::full_name(), &id);
        tabs_store.open_tab(&key, &detail_tab_label(T::element_name(), &id));
    };

    let subtitle = move || {
        let total = items.with(|all| all.len());
        let shown = page.with(|p| p.total);
        if shown == total {
            format!("{} records", total)
        } else {
            format!("{} of {} records match", shown, total)
        }
    };

    view! {
        <div class="page" id=format!("{}--list", T::full_name())>
            <PageHeader title=T::list_name().to_string() subtitle=Signal::derive(move || Some(subtitle()))>
                <button class="button button--secondary" on:click=move |_| fetch() disabled=move || loading.get()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <FilterBar
                search=Signal::derive(move || query.with(|q| q.search.clone()))
                status=Signal::derive(move || query.with(|q| q.status.clone()))
                status_options=T::status_options()
                on_search=Callback::new(move |value: String| query.update(|q| q.set_search(value)))
                on_status=Callback::new(move |value: String| query.update(|q| q.set_status(value)))
                is_filtered=Signal::derive(move || query.with(|q| q.is_filtered()))
                on_clear=Callback::new(move |_| query.update(|q| q.clear_filters()))
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {T::columns().iter().map(|column| view! {
                                <th class="table__header-cell">{*column}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || page.with(|p| p.items.iter().map(|record| {
                            let id = record.id().to_string();
                            view! {
                                <tr class="table__row" on:click=move |_| open_detail(id.clone())>
                                    {record.cells().into_iter().map(|cell| view! {
                                        <td class="table__cell">{cell.render()}</td>
                                    }).collect_view()}
                                </tr>
                            }
                        }).collect_view())}
                    </tbody>
                </table>
                <Show when=move || !loading.get() && page.with(|p| p.is_empty())>
                    <div class="table__empty">"No records match the current filters"</div>
                </Show>
                <Show when=move || loading.get()>
                    <div class="table__loading">"Loading…"</div>
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || page.with(|p| p.page))
                total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                range=Signal::derive(move || page.with(|p| range_label(p.first_row(), p.last_row(), p.total)))
                page_size=Signal::derive(move || query.with(|q| q.effective_page_size()))
                on_page_change=Callback::new(move |target: usize| {
                    let total_pages = page.with_untracked(|p| p.total_pages);
                    query.update(|q| q.set_page(target, total_pages));
                })
                on_page_size_change=Callback::new(move |size: usize| query.update(|q| q.set_page_size(size)))
            />
        </div>
    }
}
