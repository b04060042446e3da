use crate::shared::components::ui::Badge;
use contracts::domain::common::Record;
use contracts::shared::badge::Badge as BadgeData;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Значение ячейки таблицы или поля карточки
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Badge(BadgeData),
    /// Длинный текст с переносами строк
    Long(String),
    Lines(Vec<String>),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn render(self) -> AnyView {
        match self {
            Cell::Text(text) => view! { <span>{text}</span> }.into_any(),
            Cell::Badge(badge) => view! { <Badge badge=badge /> }.into_any(),
            Cell::Long(text) => view! { <div class="field__long">{text}</div> }.into_any(),
            Cell::Lines(lines) if lines.is_empty() => {
                view! { <span class="field__empty">"—"</span> }.into_any()
            }
            Cell::Lines(lines) => view! {
                <ul class="field__lines">
                    {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            }
            .into_any(),
        }
    }
}

/// Редактируемое поле формы
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub multiline: bool,
}

impl FormField {
    pub fn new(key: &'static str, label: &'static str, value: impl ToString) -> Self {
        Self {
            key,
            label,
            value: value.to_string(),
            multiline: false,
        }
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }
}

/// Как сущность показывается в универсальном списке и карточке
pub trait RecordView: Record + PartialEq {
    /// Иконка пункта меню
    fn icon() -> &'static str;

    fn columns() -> &'static [&'static str];

    /// Ячейки строки, в порядке `columns()`
    fn cells(&self) -> Vec<Cell>;

    /// Поля вкладки карточки. Вкладки со связанными записями могут вернуть пустой список.
    fn tab_fields(&self, tab: &str) -> Vec<(&'static str, Cell)>;

    fn form_fields(&self) -> Vec<FormField>;

    /// Записать значение поля формы; ошибка разбора показывается у поля
    fn set_field(&mut self, key: &str, value: &str) -> Result<(), String>;
}

pub fn parse_decimal(value: &str, label: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("{} must be a number", label))
}

pub fn parse_count(value: &str, label: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("{} must be a whole number", label))
}

/// Применить значения формы к копии записи и проверить результат.
///
/// Ошибки разбора и правил валидации собираются вместе; запись возвращается только без ошибок.
pub fn apply_form<T: RecordView>(record: &T, fields: &[FormField]) -> Result<T, FieldErrors> {
    let mut draft = record.clone();
    let mut errors = FieldErrors::new();
    for field in fields {
        if let Err(message) = draft.set_field(field.key, &field.value) {
            errors.add(field.key, message);
        }
    }
    if let Err(rule_errors) = draft.validate() {
        for (field, message) in rule_errors.0 {
            errors.add(&field, message);
        }
    }
    errors.into_result().map(|_| draft)
}
