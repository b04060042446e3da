use contracts::domain::a004_category::aggregate::Category;
use contracts::shared::detail::{RelatedList, RelatedRow};

use super::repository;
use crate::domain::a003_product;
use crate::shared::data::collection::Collection;
use crate::shared::data::mock_store::MockStore;

impl Collection for Category {
    fn store() -> &'static MockStore<Self> {
        repository::store()
    }

    fn related(&self) -> Vec<RelatedList> {
        let subcategories = subcategories(&self.id)
            .iter()
            .map(|c| RelatedRow::from_record(c, Some(format!("/{}", c.slug))))
            .collect();
        vec![
            RelatedList {
                tab: "products".to_string(),
                rows: a003_product::service::product_rows(&self.id),
            },
            RelatedList {
                tab: "subcategories".to_string(),
                rows: subcategories,
            },
        ]
    }
}

/// Прямые потомки категории
pub fn subcategories(parent_id: &str) -> Vec<Category> {
    repository::store()
        .records()
        .iter()
        .filter(|c| c.is_child_of(parent_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;

    #[test]
    fn test_category_detail_related_lists() {
        let electronics = repository::store().find("CAT-001").cloned().unwrap();
        let related = electronics.related();

        let subs = &related.iter().find(|r| r.tab == "subcategories").unwrap().rows;
        let ids: Vec<&str> = subs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["CAT-002", "CAT-003", "CAT-008"]);

        // у корневой категории своих товаров нет
        let products = &related.iter().find(|r| r.tab == "products").unwrap().rows;
        assert!(products.is_empty());
    }

    #[test]
    fn test_products_count_matches_fixtures() {
        for category in repository::store().records() {
            assert!(category.validate().is_ok(), "{}", category.id);
            let count = a003_product::service::products_in_category(&category.id).len();
            assert_eq!(count as u32, category.products_count, "{}", category.id);
        }
    }
}
