use crate::shared::data_view::{Cell, FormField, RecordView};
use crate::shared::date_utils::format_date;
use contracts::domain::a004_category::aggregate::Category;
use contracts::domain::common::Record;

impl RecordView for Category {
    fn icon() -> &'static str {
        "tag"
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Slug", "Parent", "Products", "Status"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.name),
            Cell::text(&self.slug),
            Cell::text(self.parent_id.clone().unwrap_or_else(|| "—".to_string())),
            Cell::text(self.products_count.to_string()),
            Cell::Badge(self.status_badge()),
        ]
    }

    fn tab_fields(&self, tab: &str) -> Vec<(&'static str, Cell)> {
        if tab != "overview" {
            return Vec::new();
        }
        vec![
            ("Name", Cell::text(&self.name)),
            ("Slug", Cell::text(&self.slug)),
            (
                "Parent",
                Cell::text(self.parent_id.clone().unwrap_or_else(|| "Top level".to_string())),
            ),
            ("Products", Cell::text(self.products_count.to_string())),
            ("Status", Cell::Badge(self.status_badge())),
            ("Description", Cell::Long(self.description.clone())),
            ("Created", Cell::text(format_date(&self.created_at))),
        ]
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", "Name", &self.name),
            FormField::new("slug", "Slug", &self.slug),
            FormField::new("description", "Description", &self.description).multiline(),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "name" => self.name = value.trim().to_string(),
            "slug" => self.slug = value.trim().to_string(),
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
    use contracts::domain::a004_category::aggregate::CategoryStatus;
    use contracts::domain::common::utc_date;

    fn category() -> Category {
        Category {
            id: "CAT-001".to_string(),
            name: "Electronics".to_string(),
            slug: "electronics".to_string(),
            parent_id: None,
            description: String::new(),
            products_count: 12,
            status: CategoryStatus::Active,
            created_at: utc_date(2024, 1, 5),
        }
    }

    fn with_value(mut fields: Vec<FormField>, key: &str, value: &str) -> Vec<FormField> {
        if let Some(field) = fields.iter_mut().find(|f| f.key == key) {
            field.value = value.to_string();
        }
        fields
    }

    #[test]
    fn test_form_applies_trimmed_values() {
        let record = category();
        let fields = with_value(record.form_fields(), "name", "  Audio  ");
        let updated = apply_form(&record, &fields).unwrap();
        assert_eq!(updated.name, "Audio");
        assert_eq!(updated.slug, "electronics");
    }

    #[test]
    fn test_bad_slug_blocks_the_form() {
        let record = category();
        let fields = with_value(record.form_fields(), "slug", "Not A Slug");
        let errors = apply_form(&record, &fields).unwrap_err();
        assert!(errors.get("slug").is_some());
        assert!(errors.get("name").is_none());
    }
}
