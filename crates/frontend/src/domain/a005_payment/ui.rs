use crate::shared::data_view::view::parse_decimal;
use crate::shared::data_view::{Cell, FormField, RecordView};
use crate::shared::date_utils::format_datetime;
use crate::shared::number_format::format_money;
use contracts::domain::a005_payment::aggregate::Payment;
use contracts::domain::common::Record;
use contracts::shared::badge::BadgeValue;

impl RecordView for Payment {
    fn icon() -> &'static str {
        "credit-card"
    }

    fn columns() -> &'static [&'static str] {
        &["Payment", "Order", "Customer", "Amount", "Method", "Status", "Date"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.order_id),
            Cell::text(&self.customer_name),
            Cell::text(format_money(self.amount, &self.currency)),
            Cell::Badge(self.method.badge()),
            Cell::Badge(self.status_badge()),
            Cell::text(format_datetime(&self.created_at)),
        ]
    }

    fn tab_fields(&self, tab: &str) -> Vec<(&'static str, Cell)> {
        match tab {
            "overview" => vec![
                ("Amount", Cell::text(format_money(self.amount, &self.currency))),
                ("Method", Cell::Badge(self.method.badge())),
                ("Status", Cell::Badge(self.status_badge())),
                ("Transaction", Cell::text(&self.transaction_ref)),
                ("Customer", Cell::text(&self.customer_name)),
                ("Date", Cell::text(format_datetime(&self.created_at))),
            ],
            "order" => vec![("Order", Cell::text(&self.order_id))],
            _ => Vec::new(),
        }
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("amount", "Amount", self.amount),
            FormField::new("currency", "Currency", &self.currency),
            FormField::new("transaction_ref", "Transaction reference", &self.transaction_ref),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "amount" => self.amount = parse_decimal(value, "Amount")?,
            "currency" => self.currency = value.trim().to_ascii_uppercase(),
            "transaction_ref" => self.transaction_ref = value.trim().to_string(),
            _ => {}
        }
        Ok(())
    }
}
