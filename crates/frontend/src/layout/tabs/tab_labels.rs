//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Имена коллекций берутся из `Record::list_name` / `Record::element_name` через каталог.

use super::nav_key::{parse_nav_key, NavTarget};
use crate::domain::find_collection;

/// Заголовок таба карточки до загрузки записи
pub fn detail_tab_label(element_name: &str, id: &str) -> String {
    format!("{} {}", element_name, id)
}

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    match parse_nav_key(key) {
        NavTarget::Dashboard => "Overview".to_string(),
        NavTarget::List(collection) => find_collection(&collection)
            .map(|entry| entry.list_name.to_string())
            .unwrap_or_else(|| key.to_string()),
        NavTarget::Detail { collection, id } => find_collection(&collection)
            .map(|entry| detail_tab_label(entry.element_name, &id))
            .unwrap_or_else(|| key.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_for_known_keys() {
        assert_eq!(tab_label_for_key("d400_overview"), "Overview");
        assert_eq!(tab_label_for_key("a002_orders"), "Orders");
        assert_eq!(tab_label_for_key("a004_categories_detail_CAT-001"), "Category CAT-001");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(tab_label_for_key("x999_nothing"), "x999_nothing");
        assert_eq!(tab_label_for_key("x999_nothing_detail_1"), "x999_nothing_detail_1");
    }
}
