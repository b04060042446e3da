use super::api;
use super::view::{apply_form, RecordView};
use crate::shared::icons::icon;
use contracts::shared::mutation::MutationAck;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Форма редактирования записи.
///
/// Ошибки проверки показываются у полей и блокируют отправку. Пока запрос
/// выполняется, кнопка сохранения неактивна.
#[component]
pub fn RecordForm<T: RecordView>(
    record: T,
    on_saved: Callback<MutationAck>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let original = StoredValue::new(record.clone());
    let fields = RwSignal::new(record.form_fields());
    let errors = RwSignal::new(FieldErrors::new());
    let (pending, set_pending) = signal(false);
    let (server_error, set_server_error) = signal::<Option<String>>(None);

    let submit = move || {
        if pending.get_untracked() {
            return;
        }
        let draft = original.with_value(|record| fields.with_untracked(|f| apply_form(record, f)));
        match draft {
            Err(field_errors) => {
                log::debug!("{}: {} field error(s)", T::full_name(), field_errors.0.len());
                errors.set(field_errors);
            }
            Ok(draft) => {
                errors.set(FieldErrors::new());
                set_server_error.set(None);
                set_pending.set(true);
                spawn_local(async move {
                    match api::save(&draft).await {
                        Ok(ack) => on_saved.run(ack),
                        Err(e) => set_server_error.set(Some(e)),
                    }
                    set_pending.set(false);
                });
            }
        }
    };

    let set_value = move |key: &'static str, value: String| {
        fields.update(|list| {
            if let Some(field) = list.iter_mut().find(|f| f.key == key) {
                field.value = value;
            }
        });
    };

    view! {
        <form
            class="record-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            {move || server_error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {fields.get_untracked().into_iter().map(|field| {
                let key = field.key;
                let error = move || errors.with(|e| e.get(key).map(str::to_string));
                let input = if field.multiline {
                    view! {
                        <textarea
                            class="form__textarea"
                            rows="6"
                            prop:value=field.value.clone()
                            on:input=move |ev| set_value(key, event_target_value(&ev))
                        ></textarea>
                    }
                    .into_any()
                } else {
                    view! {
                        <input
                            type="text"
                            class="form__input"
                            prop:value=field.value.clone()
                            on:input=move |ev| set_value(key, event_target_value(&ev))
                        />
                    }
                    .into_any()
                };
                view! {
                    <div class="form__group" class:form__group--error=move || error().is_some()>
                        <label class="form__label">{field.label}</label>
                        {input}
                        {move || error().map(|message| view! {
                            <div class="form__error">{message}</div>
                        })}
                    </div>
                }
            }).collect_view()}

            <div class="form__actions">
                <button type="submit" class="button button--primary" disabled=move || pending.get()>
                    {icon("save")}
                    {move || if pending.get() { "Saving…" } else { "Save" }}
                </button>
                <button type="button" class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
