use contracts::domain::a003_product::aggregate::Product;
use contracts::shared::detail::{RelatedList, RelatedRow};

use super::repository;
use crate::shared::data::collection::Collection;
use crate::shared::data::mock_store::MockStore;

impl Collection for Product {
    fn store() -> &'static MockStore<Self> {
        repository::store()
    }
}

pub fn products_in_category(category_id: &str) -> Vec<Product> {
    repository::store()
        .records()
        .iter()
        .filter(|p| p.category_id == category_id)
        .cloned()
        .collect()
}

/// Строки для вкладки "Products" категории
pub fn product_rows(category_id: &str) -> Vec<RelatedRow> {
    products_in_category(category_id)
        .iter()
        .map(|p| RelatedRow::from_record(p, Some(format!("{} · {:.2} · stock {}", p.sku, p.price, p.stock))))
        .collect()
}

pub fn low_stock() -> Vec<Product> {
    repository::store()
        .records()
        .iter()
        .filter(|p| p.is_low_stock())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;

    #[test]
    fn test_products_in_category() {
        let computers = products_in_category("CAT-003");
        assert_eq!(computers.len(), 3);
        assert!(products_in_category("CAT-404").is_empty());
        assert_eq!(product_rows("CAT-003")[0].collection, "a003_products");
    }

    #[test]
    fn test_fixtures_are_valid() {
        for product in repository::store().records() {
            assert!(product.validate().is_ok(), "{}", product.id);
        }
        assert!(low_stock().iter().any(|p| p.id == "PRD-002"));
    }
}
