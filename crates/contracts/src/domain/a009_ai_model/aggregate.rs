use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::badge::{Badge, BadgeValue};
use crate::shared::detail::TabSpec;
use crate::shared::validation::{FieldErrors, ValidationRules};

pub const MAX_TOKENS_LIMIT: u32 = 200_000;

crate::badge_enum! {
    pub enum AiModelStatus {
        Active => ("active", "Active", Success),
        Inactive => ("inactive", "Inactive", Neutral),
        Testing => ("testing", "Testing", Info),
    }
}

static DETAIL_TABS: [TabSpec; 2] = [
    TabSpec::new("overview", "Overview"),
    TabSpec::new("prompt", "System prompt"),
];

/// Настройка AI-модели (ассистент поддержки, генерация описаний и т.д.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiModel {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub system_prompt: String,
    pub status: AiModelStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for AiModel {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
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
        vec![
            self.id.as_str(),
            self.name.as_str(),
            self.provider.as_str(),
            self.model.as_str(),
        ]
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .string("name", "Name", &self.name, ValidationRules::required())
            .string("provider", "Provider", &self.provider, ValidationRules::required())
            .string("model", "Model", &self.model, ValidationRules::required())
            .number(
                "temperature",
                "Temperature",
                self.temperature,
                ValidationRules::none().with_range(Some(0.0), Some(2.0)),
            )
            .number(
                "max_tokens",
                "Max tokens",
                f64::from(self.max_tokens),
                ValidationRules::none().with_range(Some(1.0), Some(f64::from(MAX_TOKENS_LIMIT))),
            )
            .string(
                "system_prompt",
                "System prompt",
                &self.system_prompt,
                ValidationRules::none().with_max_length(4000),
            );
        errors.into_result()
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "ai_models"
    }

    fn element_name() -> &'static str {
        "AI model"
    }

    fn list_name() -> &'static str {
        "AI models"
    }

    fn id_prefix() -> &'static str {
        "AIM"
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        AiModelStatus::options()
    }

    fn detail_tabs() -> &'static [TabSpec] {
        &DETAIL_TABS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::utc_date;

    fn sample() -> AiModel {
        AiModel {
            id: "AIM-001".into(),
            name: "Support assistant".into(),
            provider: "openai".into(),
            model: "gpt-4o-mini".into(),
            temperature: 0.3,
            max_tokens: 1024,
            system_prompt: "You help customers.".into(),
            status: AiModelStatus::Active,
            created_at: utc_date(2024, 4, 1),
        }
    }

    #[test]
    fn test_ranges() {
        assert!(sample().validate().is_ok());

        let mut bad = sample();
        bad.temperature = 2.1;
        bad.max_tokens = 0;
        let errors = bad.validate().unwrap_err();
        assert!(errors.get("temperature").is_some());
        assert!(errors.get("max_tokens").is_some());
    }
}
