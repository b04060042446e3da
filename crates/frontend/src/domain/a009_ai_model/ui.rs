use crate::shared::data_view::view::{parse_count, parse_decimal};
use crate::shared::data_view::{Cell, FormField, RecordView};
use crate::shared::date_utils::format_date;
use crate::shared::number_format::{format_number_int, format_number_with_decimals};
use contracts::domain::a009_ai_model::aggregate::AiModel;
use contracts::domain::common::Record;

impl RecordView for AiModel {
    fn icon() -> &'static str {
        "cpu"
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Provider", "Model", "Temperature", "Status"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.name),
            Cell::text(&self.provider),
            Cell::text(&self.model),
            Cell::text(format_number_with_decimals(self.temperature, 1)),
            Cell::Badge(self.status_badge()),
        ]
    }

    fn tab_fields(&self, tab: &str) -> Vec<(&'static str, Cell)> {
        match tab {
            "overview" => vec![
                ("Name", Cell::text(&self.name)),
                ("Provider", Cell::text(&self.provider)),
                ("Model", Cell::text(&self.model)),
                ("Temperature", Cell::text(format_number_with_decimals(self.temperature, 1))),
                ("Max tokens", Cell::text(format_number_int(f64::from(self.max_tokens)))),
                ("Status", Cell::Badge(self.status_badge())),
                ("Created", Cell::text(format_date(&self.created_at))),
            ],
            "prompt" => vec![("System prompt", Cell::Long(self.system_prompt.clone()))],
            _ => Vec::new(),
        }
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", "Name", &self.name),
            FormField::new("provider", "Provider", &self.provider),
            FormField::new("model", "Model", &self.model),
            FormField::new("temperature", "Temperature", self.temperature),
            FormField::new("max_tokens", "Max tokens", self.max_tokens),
            FormField::new("system_prompt", "System prompt", &self.system_prompt).multiline(),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "name" => self.name = value.trim().to_string(),
            "provider" => self.provider = value.trim().to_string(),
            "model" => self.model = value.trim().to_string(),
            "temperature" => self.temperature = parse_decimal(value, "Temperature")?,
            "max_tokens" => self.max_tokens = parse_count(value, "Max tokens")?,
            "system_prompt" => self.system_prompt = value.to_string(),
            _ => {}
        }
        Ok(())
    }
}
