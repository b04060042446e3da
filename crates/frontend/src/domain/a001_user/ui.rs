use crate::shared::data_view::view::parse_decimal;
use crate::shared::data_view::{Cell, FormField, RecordView};
use crate::shared::date_utils::{format_date, format_optional_datetime};
use crate::shared::number_format::format_money;
use contracts::domain::a001_user::aggregate::User;
use contracts::domain::common::Record;
use contracts::shared::badge::BadgeValue;

impl RecordView for User {
    fn icon() -> &'static str {
        "users"
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Email", "Role", "Orders", "Status", "Joined"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.name),
            Cell::text(&self.email),
            Cell::Badge(self.role.badge()),
            Cell::text(self.orders_count.to_string()),
            Cell::Badge(self.status_badge()),
            Cell::text(format_date(&self.created_at)),
        ]
    }

    fn tab_fields(&self, tab: &str) -> Vec<(&'static str, Cell)> {
        match tab {
            "profile" => vec![
                ("Name", Cell::text(&self.name)),
                ("Email", Cell::text(&self.email)),
                ("Phone", Cell::text(&self.phone)),
                ("Role", Cell::Badge(self.role.badge())),
                ("Status", Cell::Badge(self.status_badge())),
            ],
            "orders" => vec![
                ("Orders", Cell::text(self.orders_count.to_string())),
                ("Total spent", Cell::text(format_money(self.total_spent, "USD"))),
            ],
            "activity" => vec![
                ("Last login", Cell::text(format_optional_datetime(self.last_login.as_ref()))),
                ("Joined", Cell::text(format_date(&self.created_at))),
            ],
            _ => Vec::new(),
        }
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", "Name", &self.name),
            FormField::new("email", "Email", &self.email),
            FormField::new("phone", "Phone", &self.phone),
            FormField::new("total_spent", "Total spent", self.total_spent),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "name" => self.name = value.trim().to_string(),
            "email" => self.email = value.trim().to_string(),
            "phone" => self.phone = value.trim().to_string(),
            "total_spent" => self.total_spent = parse_decimal(value, "Total spent")?,
            _ => {}
        }
        Ok(())
    }
}
