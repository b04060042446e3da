use crate::shared::data_view::{Cell, FormField, RecordView};
use crate::shared::date_utils::{format_date, format_datetime};
use contracts::domain::a008_policy::aggregate::Policy;
use contracts::domain::common::Record;
use contracts::shared::badge::BadgeValue;

impl RecordView for Policy {
    fn icon() -> &'static str {
        "file-text"
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Title", "Kind", "Version", "Status", "Updated"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.title),
            Cell::Badge(self.kind.badge()),
            Cell::text(&self.version),
            Cell::Badge(self.status_badge()),
            Cell::text(format_date(&self.updated_at)),
        ]
    }

    fn tab_fields(&self, tab: &str) -> Vec<(&'static str, Cell)> {
        match tab {
            "content" => vec![("Text", Cell::Long(self.content.clone()))],
            "details" => vec![
                ("Slug", Cell::text(&self.slug)),
                ("Kind", Cell::Badge(self.kind.badge())),
                ("Version", Cell::text(&self.version)),
                ("Status", Cell::Badge(self.status_badge())),
                ("Updated", Cell::text(format_datetime(&self.updated_at))),
                ("Created", Cell::text(format_date(&self.created_at))),
            ],
            _ => Vec::new(),
        }
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("title", "Title", &self.title),
            FormField::new("slug", "Slug", &self.slug),
            FormField::new("version", "Version", &self.version),
            FormField::new("content", "Content", &self.content).multiline(),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "title" => self.title = value.trim().to_string(),
            "slug" => self.slug = value.trim().to_string(),
            "version" => self.version = value.trim().to_string(),
            "content" => self.content = value.to_string(),
            _ => {}
        }
        Ok(())
    }
}
