use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::badge::{Badge, BadgeValue};
use crate::shared::detail::TabSpec;
use crate::shared::validation::{FieldErrors, ValidationRules};

/// Порог остатка, ниже которого товар считается заканчивающимся
pub const LOW_STOCK_THRESHOLD: u32 = 10;

crate::badge_enum! {
    /// Статус товара в каталоге
    pub enum ProductStatus {
        Active => ("active", "Active", Success),
        Draft => ("draft", "Draft", Neutral),
        OutOfStock => ("out_of_stock", "Out of stock", Danger),
        Archived => ("archived", "Archived", Info),
    }
}

static DETAIL_TABS: [TabSpec; 2] = [
    TabSpec::new("overview", "Overview"),
    TabSpec::new("inventory", "Inventory"),
];

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    /// Неформальная ссылка на `Category::id`
    pub category_id: String,
    pub price: f64,
    pub stock: u32,
    pub description: String,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// Стоимость остатка по цене продажи
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn status_key(&self) -> &'static str {
        self.status.key()
    }

    fn status_badge(&self) -> Badge {
        self.status.badge()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.sku.as_str()]
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .string("name", "Name", &self.name, ValidationRules::required().with_max_length(120))
            .string(
                "sku",
                "SKU",
                &self.sku,
                ValidationRules::required()
                    .with_pattern(r"^[A-Z0-9]+(?:-[A-Z0-9]+)*$", "SKU may only contain A-Z, 0-9 and dashes"),
            )
            .string("category_id", "Category", &self.category_id, ValidationRules::required())
            .number(
                "price",
                "Price",
                self.price,
                ValidationRules::none().with_range(Some(0.0), None),
            );
        errors.into_result()
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn id_prefix() -> &'static str {
        "PRD"
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        ProductStatus::options()
    }

    fn detail_tabs() -> &'static [TabSpec] {
        &DETAIL_TABS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::utc_date;

    fn sample() -> Product {
        Product {
            id: "PRD-001".into(),
            name: "Wireless Headphones".into(),
            sku: "WH-1000".into(),
            category_id: "CAT-002".into(),
            price: 199.0,
            stock: 4,
            description: String::new(),
            status: ProductStatus::Active,
            created_at: utc_date(2024, 1, 10),
        }
    }

    #[test]
    fn test_stock_helpers() {
        let product = sample();
        assert!(product.is_low_stock());
        assert_eq!(product.stock_value(), 796.0);
    }

    #[test]
    fn test_sku_validation() {
        assert!(sample().validate().is_ok());
        let mut bad = sample();
        bad.sku = "wh 1000".into();
        assert!(bad.validate().unwrap_err().get("sku").is_some());
    }
}
