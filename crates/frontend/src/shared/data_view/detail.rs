use super::api;
use super::form::RecordForm;
use super::view::RecordView;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_key, tab_label_for_key};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::shared::detail::{DetailState, RelatedList, RelatedRow, TabState};
use contracts::shared::mutation::MutationAck;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn ack_message(element_name: &str, ack: &MutationAck) -> String {
    format!(
        "{} {} {} (simulated, data is unchanged)",
        element_name,
        ack.id,
        ack.action.as_str()
    )
}

/// Карточка записи: заголовок, вкладки, связанные списки, редактирование и удаление.
///
/// Пока запрос не вернулся, показывается заглушка загрузки; неизвестный id даёт
/// "not found" без ошибки. Переключение вкладок не перезапрашивает данные.
#[component]
pub fn RecordDetailPage<T: RecordView>(
    id: String,
    /// Ключ вкладки, заголовок которой обновляется после загрузки
    tab_key: String,
    on_close: Callback<()>,
    #[prop(optional)] _marker: std::marker::PhantomData<T>,
) -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();

    let state = RwSignal::new(DetailState::<T>::Loading);
    let related = RwSignal::new(Vec::<RelatedList>::new());
    let tab_state = RwSignal::new(TabState::new(T::detail_tabs()));
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);
    let (editing, set_editing) = signal(false);

    let record_id = StoredValue::new(id);
    let tab_key = StoredValue::new(tab_key);

    spawn_local(async move {
        let id = record_id.get_value();
        match api::fetch_detail::<T>(&id).await {
            Ok(Some(detail)) => {
                let title = format!("{}: {}", T::element_name(), detail.record.title());
                tabs_store.update_tab_title(&tab_key.get_value(), &title);
                related.set(detail.related);
                state.set(DetailState::Loaded(detail.record));
            }
            Ok(None) => {
                log::warn!("{} not found: {}", T::element_name(), id);
                state.set(DetailState::NotFound(id));
            }
            Err(e) => {
                log::error!("{}: failed to load {}: {}", T::full_name(), id, e);
                set_error.set(Some(e));
                state.set(DetailState::NotFound(id));
            }
        }
    });

    let delete = move || {
        if pending.get_untracked() {
            return;
        }
        let id = record_id.get_value();
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete {} {}?", T::element_name(), id))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_pending.set(true);
        set_notice.set(None);
        spawn_local(async move {
            match api::delete::<T>(&id).await {
                Ok(ack) => {
                    set_error.set(None);
                    set_notice.set(Some(ack_message(T::element_name(), &ack)));
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_pending.set(false);
        });
    };

    let open_related = move |row: RelatedRow| {
        let key = detail_key(&row.collection, &row.id);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let header_badge = move || {
        state.with(|s| s.record().map(|record| view! { <Badge badge=record.status_badge() /> }))
    };

    view! {
        <div class="page page--detail" id=format!("{}--detail", T::full_name())>
            <PageHeader
                title=Signal::derive(move || state.with(|s| s.heading()))
                subtitle=Signal::derive(move || Some(record_id.get_value()))
            >
                {header_badge}
                <Show when=move || state.with(|s| s.record().is_some()) && !editing.get()>
                    <button class="button button--secondary" on:click=move |_| set_editing.set(true)>
                        "Edit"
                    </button>
                    <button
                        class="button button--danger"
                        on:click=move |_| delete()
                        disabled=move || pending.get()
                    >
                        {icon("delete")}
                        {move || if pending.get() { "Deleting…" } else { "Delete" }}
                    </button>
                </Show>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    "Close"
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            {move || notice.get().map(|text| view! {
                <div class="info-box">{text}</div>
            })}

            {move || match state.get() {
                DetailState::Loading => view! {
                    <div class="placeholder">"Loading…"</div>
                }.into_any(),
                DetailState::NotFound(missing) => view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">
                            {format!("{} {} was not found", T::element_name(), missing)}
                        </span>
                    </div>
                }.into_any(),
                DetailState::Loaded(record) if editing.get() => view! {
                    <RecordForm<T>
                        record=record
                        on_saved=Callback::new(move |ack: MutationAck| {
                            set_notice.set(Some(ack_message(T::element_name(), &ack)));
                            set_editing.set(false);
                        })
                        on_cancel=Callback::new(move |_| set_editing.set(false))
                    />
                }.into_any(),
                DetailState::Loaded(record) => view! {
                    <div class="detail-tabs">
                        {T::detail_tabs().iter().map(|spec| {
                            let key = spec.key;
                            view! {
                                <button
                                    class="detail-tabs__tab"
                                    class:detail-tabs__tab--active=move || tab_state.with(|t| t.is_active(key))
                                    on:click=move |_| tab_state.update(|t| { t.select(key); })
                                >
                                    {spec.label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                    <div class="detail-tabs__content">
                        {move || {
                            let active = tab_state.with(|t| t.active());
                            let rows: Option<Vec<RelatedRow>> = related.with(|lists| {
                                lists.iter().find(|l| l.tab == active).map(|l| l.rows.clone())
                            });
                            let fields = record.tab_fields(active);
                            view! {
                                {(!fields.is_empty()).then(|| view! {
                                    <dl class="detail-fields">
                                        {fields.into_iter().map(|(label, cell)| view! {
                                            <div class="detail-fields__row">
                                                <dt class="detail-fields__label">{label}</dt>
                                                <dd class="detail-fields__value">{cell.render()}</dd>
                                            </div>
                                        }).collect_view()}
                                    </dl>
                                })}
                                {rows.map(|rows| view! { <RelatedTable rows=rows on_open=Callback::new(open_related) /> })}
                            }
                        }}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// Связанные записи одной вкладки; клик открывает карточку связанной записи
#[component]
fn RelatedTable(rows: Vec<RelatedRow>, on_open: Callback<RelatedRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <div class="table__empty">"Nothing linked yet"</div> }.into_any();
    }
    view! {
        <table class="table__data table--striped">
            <tbody>
                {rows.into_iter().map(|row| {
                    let for_click = row.clone();
                    view! {
                        <tr class="table__row" on:click=move |_| on_open.run(for_click.clone())>
                            <td class="table__cell">{row.id}</td>
                            <td class="table__cell">{row.title}</td>
                            <td class="table__cell">{row.subtitle.unwrap_or_default()}</td>
                            <td class="table__cell"><Badge badge=row.badge /></td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::mutation::MutationAction;

    #[test]
    fn test_ack_message() {
        let ack = MutationAck {
            id: "ORD-1001".to_string(),
            action: MutationAction::Deleted,
        };
        assert_eq!(
            ack_message("Order", &ack),
            "Order ORD-1001 deleted (simulated, data is unchanged)"
        );
    }
}
