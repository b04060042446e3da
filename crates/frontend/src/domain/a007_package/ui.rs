use crate::shared::data_view::view::parse_decimal;
use crate::shared::data_view::{Cell, FormField, RecordView};
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_money;
use contracts::domain::a007_package::aggregate::Package;
use contracts::domain::common::Record;
use contracts::shared::badge::BadgeValue;

impl RecordView for Package {
    fn icon() -> &'static str {
        "layers"
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Price", "Billing", "Subscribers", "Status"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.name),
            Cell::text(format_money(self.price, "USD")),
            Cell::Badge(self.billing_cycle.badge()),
            Cell::text(self.subscribers.to_string()),
            Cell::Badge(self.status_badge()),
        ]
    }

    fn tab_fields(&self, tab: &str) -> Vec<(&'static str, Cell)> {
        match tab {
            "overview" => vec![
                ("Name", Cell::text(&self.name)),
                ("Price", Cell::text(format_money(self.price, "USD"))),
                ("Billing", Cell::Badge(self.billing_cycle.badge())),
                ("Per month", Cell::text(format_money(self.monthly_price(), "USD"))),
                ("Subscribers", Cell::text(self.subscribers.to_string())),
                ("Monthly revenue", Cell::text(format_money(self.monthly_revenue(), "USD"))),
                ("Status", Cell::Badge(self.status_badge())),
                ("Created", Cell::text(format_date(&self.created_at))),
            ],
            "features" => vec![("Features", Cell::Lines(self.features.clone()))],
            _ => Vec::new(),
        }
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", "Name", &self.name),
            FormField::new("price", "Price", self.price),
            FormField::new("features", "Features (one per line)", self.features.join("\n")).multiline(),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "name" => self.name = value.trim().to_string(),
            "price" => self.price = parse_decimal(value, "Price")?,
            "features" => {
                self.features = value
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect()
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_package::aggregate::{BillingCycle, PackageStatus};
    use contracts::domain::common::utc_date;

    #[test]
    fn test_features_are_edited_one_per_line() {
        let mut package = Package {
            id: "PKG-001".to_string(),
            name: "Starter".to_string(),
            price: 9.0,
            billing_cycle: BillingCycle::Monthly,
            features: vec!["1 store".to_string()],
            subscribers: 40,
            status: PackageStatus::Active,
            created_at: utc_date(2024, 2, 1),
        };
        package
            .set_field("features", "1 store\n\n  Email support \n")
            .unwrap();
        assert_eq!(package.features, vec!["1 store", "Email support"]);
        assert!(package.set_field("price", "nine").is_err());
    }
}
