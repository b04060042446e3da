use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::badge::{Badge, BadgeValue};
use crate::shared::detail::TabSpec;
use crate::shared::validation::{FieldErrors, ValidationRules, SLUG_PATTERN};

crate::badge_enum! {
    pub enum PolicyStatus {
        Published => ("published", "Published", Success),
        Draft => ("draft", "Draft", Warning),
        Archived => ("archived", "Archived", Neutral),
    }
}

crate::badge_enum! {
    pub enum PolicyKind {
        Privacy => ("privacy", "Privacy", Info),
        Terms => ("terms", "Terms of service", Primary),
        Refund => ("refund", "Refund", Warning),
        Shipping => ("shipping", "Shipping", Neutral),
    }
}

static DETAIL_TABS: [TabSpec; 2] = [
    TabSpec::new("content", "Content"),
    TabSpec::new("details", "Details"),
];

/// Политика магазина (конфиденциальность, возвраты и т.д.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub kind: PolicyKind,
    pub version: String,
    pub content: String,
    pub status: PolicyStatus,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Record for Policy {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
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
        vec![self.id.as_str(), self.title.as_str(), self.slug.as_str()]
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .string("title", "Title", &self.title, ValidationRules::required().with_max_length(120))
            .string(
                "slug",
                "Slug",
                &self.slug,
                ValidationRules::required().with_pattern(
                    SLUG_PATTERN,
                    "Slug may only contain lowercase letters, digits and single dashes",
                ),
            )
            .string(
                "version",
                "Version",
                &self.version,
                ValidationRules::required().with_pattern(r"^\d+\.\d+$", "Version must look like 1.0"),
            )
            .string("content", "Content", &self.content, ValidationRules::required());
        errors.into_result()
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "policies"
    }

    fn element_name() -> &'static str {
        "Policy"
    }

    fn list_name() -> &'static str {
        "Policies"
    }

    fn id_prefix() -> &'static str {
        "POL"
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        PolicyStatus::options()
    }

    fn detail_tabs() -> &'static [TabSpec] {
        &DETAIL_TABS
    }
}
