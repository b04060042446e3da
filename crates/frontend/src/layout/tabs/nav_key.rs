//! Ключи навигации.
//!
//! - `a002_orders` - список коллекции
//! - `a002_orders_detail_ORD-1001` - карточка записи
//! - `d400_overview` - обзорный дашборд

/// Ключ обзорного дашборда
pub const OVERVIEW_KEY: &str = "d400_overview";

const DETAIL_SEPARATOR: &str = "_detail_";

/// Что открыто во вкладке
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Dashboard,
    /// Список коллекции, внутри полное имя (`a002_orders`)
    List(String),
    Detail { collection: String, id: String },
}

pub fn parse_nav_key(key: &str) -> NavTarget {
    let key = key.trim();
    if key == OVERVIEW_KEY {
        return NavTarget::Dashboard;
    }
    match key.split_once(DETAIL_SEPARATOR) {
        Some((collection, id)) if !collection.is_empty() && !id.is_empty() => NavTarget::Detail {
            collection: collection.to_string(),
            id: id.to_string(),
        },
        _ => NavTarget::List(key.to_string()),
    }
}

/// Ключ вкладки карточки записи
pub fn detail_key(collection: &str, id: &str) -> String {
    format!("{}{}{}", collection, DETAIL_SEPARATOR, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_key() {
        assert_eq!(
            parse_nav_key("a002_orders"),
            NavTarget::List("a002_orders".to_string())
        );
        assert_eq!(parse_nav_key(" d400_overview "), NavTarget::Dashboard);
    }

    #[test]
    fn test_parse_detail_key() {
        assert_eq!(
            parse_nav_key("a002_orders_detail_ORD-1001"),
            NavTarget::Detail {
                collection: "a002_orders".to_string(),
                id: "ORD-1001".to_string(),
            }
        );
        // only the first separator splits
        assert_eq!(
            parse_nav_key("a010_site_content_detail_x_detail_y"),
            NavTarget::Detail {
                collection: "a010_site_content".to_string(),
                id: "x_detail_y".to_string(),
            }
        );
    }

    #[test]
    fn test_detail_key_without_id_is_not_a_detail() {
        assert_eq!(
            parse_nav_key("a002_orders_detail_"),
            NavTarget::List("a002_orders_detail_".to_string())
        );
    }

    #[test]
    fn test_detail_key_round_trip() {
        let key = detail_key("a004_categories", "CAT-003");
        assert_eq!(key, "a004_categories_detail_CAT-003");
        assert_eq!(
            parse_nav_key(&key),
            NavTarget::Detail {
                collection: "a004_categories".to_string(),
                id: "CAT-003".to_string(),
            }
        );
    }
}
