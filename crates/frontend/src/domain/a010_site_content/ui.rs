use crate::shared::data_view::{Cell, FormField, RecordView};
use crate::shared::date_utils::{format_date, format_optional_datetime};
use contracts::domain::a010_site_content::aggregate::SiteContent;
use contracts::domain::common::Record;
use contracts::shared::badge::BadgeValue;

impl RecordView for SiteContent {
    fn icon() -> &'static str {
        "layout"
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Title", "Section", "Status", "Publish at"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.title),
            Cell::Badge(self.section.badge()),
            Cell::Badge(self.status_badge()),
            Cell::text(format_optional_datetime(self.publish_at.as_ref())),
        ]
    }

    fn tab_fields(&self, tab: &str) -> Vec<(&'static str, Cell)> {
        match tab {
            "content" => vec![("Body", Cell::Long(self.body.clone()))],
            "details" => vec![
                ("Slug", Cell::text(&self.slug)),
                ("Section", Cell::Badge(self.section.badge())),
                ("Status", Cell::Badge(self.status_badge())),
                ("Publish at", Cell::text(format_optional_datetime(self.publish_at.as_ref()))),
                ("Created", Cell::text(format_date(&self.created_at))),
            ],
            _ => Vec::new(),
        }
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("title", "Title", &self.title),
            FormField::new("slug", "Slug", &self.slug),
            FormField::new("body", "Body", &self.body).multiline(),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "title" => self.title = value.trim().to_string(),
            "slug" => self.slug = value.trim().to_string(),
            "body" => self.body = value.to_string(),
            _ => {}
        }
        Ok(())
    }
}
