use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a005_payment::aggregate::PaymentMethod;
use crate::domain::common::Record;
use crate::shared::badge::{Badge, BadgeValue};
use crate::shared::detail::TabSpec;
use crate::shared::validation::{FieldErrors, ValidationRules, EMAIL_PATTERN};

crate::badge_enum! {
    /// Статус заказа
    pub enum OrderStatus {
        Pending => ("pending", "Pending", Warning),
        Processing => ("processing", "Processing", Info),
        Shipped => ("shipped", "Shipped", Primary),
        Completed => ("completed", "Completed", Success),
        Cancelled => ("cancelled", "Cancelled", Danger),
    }
}

static DETAIL_TABS: [TabSpec; 3] = [
    TabSpec::new("overview", "Overview"),
    TabSpec::new("items", "Items"),
    TabSpec::new("payments", "Payments"),
];

/// Строка заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn amount(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Заказ покупателя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub shipping_address: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Сумма по строкам (может отличаться от `total` на доставку/скидки)
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::amount).sum()
    }

    /// Число единиц товара; огромные количества упираются в `u32::MAX`
    pub fn items_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.id
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
        vec![self.id.as_str(), self.customer_name.as_str(), self.customer_email.as_str()]
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .string("customer_name", "Customer", &self.customer_name, ValidationRules::required())
            .string(
                "customer_email",
                "Customer email",
                &self.customer_email,
                ValidationRules::required().with_pattern(EMAIL_PATTERN, "Email address is not valid"),
            )
            .number(
                "total",
                "Total",
                self.total,
                ValidationRules::none().with_range(Some(0.0), None),
            )
            .string(
                "shipping_address",
                "Shipping address",
                &self.shipping_address,
                ValidationRules::required(),
            );
        if self.items.iter().any(|i| i.quantity == 0) {
            errors.add("items", "Every item needs a quantity of at least 1");
        }
        errors.into_result()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }

    fn id_prefix() -> &'static str {
        "ORD"
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        OrderStatus::options()
    }

    fn detail_tabs() -> &'static [TabSpec] {
        &DETAIL_TABS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::utc_date;

    fn sample() -> Order {
        Order {
            id: "ORD-1001".into(),
            customer_name: "Alice Martin".into(),
            customer_email: "alice@example.com".into(),
            items: vec![
                OrderItem {
                    product_id: "PRD-001".into(),
                    name: "Headphones".into(),
                    quantity: 2,
                    unit_price: 50.0,
                },
                OrderItem {
                    product_id: "PRD-002".into(),
                    name: "Cable".into(),
                    quantity: 1,
                    unit_price: 9.5,
                },
            ],
            total: 109.5,
            payment_method: PaymentMethod::Card,
            shipping_address: "12 Rue de Rivoli, Paris".into(),
            status: OrderStatus::Pending,
            created_at: utc_date(2024, 5, 2),
        }
    }

    #[test]
    fn test_items_totals() {
        let order = sample();
        assert_eq!(order.items_total(), 109.5);
        assert_eq!(order.items_count(), 3);
    }

    #[test]
    fn test_items_count_saturates() {
        let mut order = sample();
        order.items[0].quantity = u32::MAX;
        assert_eq!(order.items_count(), u32::MAX);
    }

    #[test]
    fn test_validation() {
        assert!(sample().validate().is_ok());

        let mut bad = sample();
        bad.customer_email = "not-an-email".into();
        bad.total = -1.0;
        bad.items[0].quantity = 0;
        let errors = bad.validate().unwrap_err();
        assert!(errors.get("customer_email").is_some());
        assert!(errors.get("total").is_some());
        assert!(errors.get("items").is_some());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["payment_method"], "card");
    }
}
