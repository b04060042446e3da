use crate::shared::data_view::view::{parse_count, parse_decimal};
use crate::shared::data_view::{Cell, FormField, RecordView};
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_money;
use contracts::domain::a003_product::aggregate::{Product, LOW_STOCK_THRESHOLD};
use contracts::domain::common::Record;
use contracts::shared::badge::{Badge, Tone};

fn stock_badge(product: &Product) -> Badge {
    if product.stock == 0 {
        Badge::new("0", Tone::Danger)
    } else if product.is_low_stock() {
        Badge::new(product.stock.to_string(), Tone::Warning)
    } else {
        Badge::new(product.stock.to_string(), Tone::Neutral)
    }
}

impl RecordView for Product {
    fn icon() -> &'static str {
        "package"
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "SKU", "Price", "Stock", "Status"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.name),
            Cell::text(&self.sku),
            Cell::text(format_money(self.price, "USD")),
            Cell::Badge(stock_badge(self)),
            Cell::Badge(self.status_badge()),
        ]
    }

    fn tab_fields(&self, tab: &str) -> Vec<(&'static str, Cell)> {
        match tab {
            "overview" => vec![
                ("Name", Cell::text(&self.name)),
                ("SKU", Cell::text(&self.sku)),
                ("Category", Cell::text(&self.category_id)),
                ("Price", Cell::text(format_money(self.price, "USD"))),
                ("Status", Cell::Badge(self.status_badge())),
                ("Description", Cell::Long(self.description.clone())),
                ("Created", Cell::text(format_date(&self.created_at))),
            ],
            "inventory" => vec![
                ("In stock", Cell::Badge(stock_badge(self))),
                ("Low stock below", Cell::text(LOW_STOCK_THRESHOLD.to_string())),
                ("Stock value", Cell::text(format_money(self.stock_value(), "USD"))),
            ],
            _ => Vec::new(),
        }
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", "Name", &self.name),
            FormField::new("sku", "SKU", &self.sku),
            FormField::new("price", "Price", self.price),
            FormField::new("stock", "Stock", self.stock),
            FormField::new("description", "Description", &self.description).multiline(),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "name" => self.name = value.trim().to_string(),
            "sku" => self.sku = value.trim().to_string(),
            "price" => self.price = parse_decimal(value, "Price")?,
            "stock" => self.stock = parse_count(value, "Stock")?,
            "description" => self.description = value.to_string(),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_view::view::apply_form;
    use contracts::domain::a003_product::aggregate::ProductStatus;
    use contracts::domain::common::utc_date;

    fn product(stock: u32) -> Product {
        Product {
            id: "PRD-001".to_string(),
            name: "Wireless Mouse".to_string(),
            sku: "WM-100".to_string(),
            category_id: "CAT-002".to_string(),
            price: 25.0,
            stock,
            description: String::new(),
            status: ProductStatus::Active,
            created_at: utc_date(2024, 1, 10),
        }
    }

    #[test]
    fn test_stock_badge_tones() {
        assert_eq!(stock_badge(&product(0)).tone, Tone::Danger);
        assert_eq!(stock_badge(&product(3)).tone, Tone::Warning);
        assert_eq!(stock_badge(&product(120)).tone, Tone::Neutral);
    }

    #[test]
    fn test_unparsable_stock_is_a_field_error() {
        let record = product(5);
        let mut fields = record.form_fields();
        for field in fields.iter_mut() {
            if field.key == "stock" {
                field.value = "lots".to_string();
            }
            if field.key == "price" {
                field.value = "-1".to_string();
            }
        }
        let errors = apply_form(&record, &fields).unwrap_err();
        assert_eq!(errors.get("stock"), Some("Stock must be a whole number"));
        assert!(errors.get("price").is_some());
    }
}
