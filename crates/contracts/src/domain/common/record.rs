use chrono::{DateTime, TimeZone, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::shared::badge::Badge;
use crate::shared::detail::TabSpec;
use crate::shared::validation::FieldErrors;

/// Трейт для записи коллекции (пользователь, заказ, товар и т.д.)
///
/// Определяет всё, что нужно универсальному списку и детальному просмотру
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Уникальный в пределах коллекции идентификатор (например, "ORD-1001")
    fn id(&self) -> &str;

    /// Заголовок записи для списка и детального просмотра
    fn title(&self) -> &str;

    /// Ключ статуса (`snake_case`), по нему работает фильтр статуса
    fn status_key(&self) -> &'static str;

    /// Бейдж статуса
    fn status_badge(&self) -> Badge;

    fn created_at(&self) -> DateTime<Utc>;

    /// Текстовые поля, по которым работает поиск
    fn search_fields(&self) -> Vec<&str>;

    /// Валидация перед create/update
    fn validate(&self) -> Result<(), FieldErrors> {
        Ok(())
    }

    // ============================================================================
    // Метаданные коллекции
    // ============================================================================

    /// Индекс сущности в системе (например, "a002")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (сегмент URL, например, "orders")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Префикс идентификаторов новых записей (например, "ORD")
    fn id_prefix() -> &'static str;

    /// `(key, label)` для выпадающего фильтра статусов
    fn status_options() -> Vec<(&'static str, &'static str)>;

    /// Вкладки детального просмотра
    fn detail_tabs() -> &'static [TabSpec];

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя сущности (например, "a002_orders"), используется как ключ навигации
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

/// Полночь UTC для заданной даты. Некорректная дата даёт UNIX epoch.
pub fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_utc_date() {
        let d = utc_date(2024, 3, 15);
        assert_eq!((d.year(), d.month(), d.day()), (2024, 3, 15));
        assert_eq!(utc_date(2024, 2, 30), DateTime::<Utc>::default());
    }
}
