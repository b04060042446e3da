pub mod a001_user;
pub mod a002_order;
pub mod a003_product;
pub mod a004_category;
pub mod a005_payment;
pub mod a006_complaint;
pub mod a007_package;
pub mod a008_policy;
pub mod a009_ai_model;
pub mod a010_site_content;

use crate::shared::data_view::RecordView;
use contracts::domain::a001_user::aggregate::User;
use contracts::domain::a002_order::aggregate::Order;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_category::aggregate::Category;
use contracts::domain::a005_payment::aggregate::Payment;
use contracts::domain::a006_complaint::aggregate::Complaint;
use contracts::domain::a007_package::aggregate::Package;
use contracts::domain::a008_policy::aggregate::Policy;
use contracts::domain::a009_ai_model::aggregate::AiModel;
use contracts::domain::a010_site_content::aggregate::SiteContent;

/// Коллекция в меню и заголовках вкладок
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionEntry {
    /// Ключ навигации списка, например "a002_orders"
    pub key: String,
    pub list_name: &'static str,
    pub element_name: &'static str,
    pub icon: &'static str,
}

fn entry<T: RecordView>() -> CollectionEntry {
    CollectionEntry {
        key: T::full_name(),
        list_name: T::list_name(),
        element_name: T::element_name(),
        icon: T::icon(),
    }
}

/// Все коллекции админки в порядке индексов
pub fn catalogue() -> Vec<CollectionEntry> {
    vec![
        entry::<User>(),
        entry::<Order>(),
        entry::<Product>(),
        entry::<Category>(),
        entry::<Payment>(),
        entry::<Complaint>(),
        entry::<Package>(),
        entry::<Policy>(),
        entry::<AiModel>(),
        entry::<SiteContent>(),
    ]
}

pub fn find_collection(key: &str) -> Option<CollectionEntry> {
    catalogue().into_iter().find(|entry| entry.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_keys_are_unique() {
        let entries = catalogue();
        let keys: HashSet<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys.len(), 10);
        assert!(keys.contains("a009_ai_models"));
        assert!(keys.contains("a010_site_content"));
    }

    #[test]
    fn test_find_collection() {
        let orders = find_collection("a002_orders").map(|e| e.element_name);
        assert_eq!(orders, Some("Order"));
        assert!(find_collection("a002_order").is_none());
    }
}
