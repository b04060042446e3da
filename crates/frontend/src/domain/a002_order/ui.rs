use crate::shared::data_view::{Cell, FormField, RecordView};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::number_format::format_money;
use contracts::domain::a002_order::aggregate::Order;
use contracts::domain::common::Record;
use contracts::shared::badge::BadgeValue;

impl RecordView for Order {
    fn icon() -> &'static str {
        "shopping-cart"
    }

    fn columns() -> &'static [&'static str] {
        &["Order", "Customer", "Items", "Total", "Payment", "Status", "Date"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.customer_name),
            Cell::text(self.items_count().to_string()),
            Cell::text(format_money(self.total, "USD")),
            Cell::Badge(self.payment_method.badge()),
            Cell::Badge(self.status_badge()),
            Cell::text(format_date(&self.created_at)),
        ]
    }

    fn tab_fields(&self, tab: &str) -> Vec<(&'static str, Cell)> {
        match tab {
            "overview" => vec![
                ("Customer", Cell::text(&self.customer_name)),
                ("Email", Cell::text(&self.customer_email)),
                ("Shipping address", Cell::text(&self.shipping_address)),
                ("Payment method", Cell::Badge(self.payment_method.badge())),
                ("Status", Cell::Badge(self.status_badge())),
                ("Placed", Cell::text(format_datetime(&self.created_at))),
                ("Total", Cell::text(format_money(self.total, "USD"))),
            ],
            "items" => vec![(
                "Items",
                Cell::Lines(
                    self.items
                        .iter()
                        .map(|item| {
                            format!(
                                "{} × {} @ {} = {}",
                                item.quantity,
                                item.name,
                                format_money(item.unit_price, "USD"),
                                format_money(item.amount(), "USD")
                            )
                        })
                        .collect(),
                ),
            )],
            // payments come from the related list
            _ => Vec::new(),
        }
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("customer_name", "Customer", &self.customer_name),
            FormField::new("customer_email", "Customer email", &self.customer_email),
            FormField::new("shipping_address", "Shipping address", &self.shipping_address).multiline(),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "customer_name" => self.customer_name = value.trim().to_string(),
            "customer_email" => self.customer_email = value.trim().to_string(),
            "shipping_address" => self.shipping_address = value.trim().to_string(),
            _ => {}
        }
        Ok(())
    }
}
