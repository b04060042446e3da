use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::badge::{Badge, BadgeValue};
use crate::shared::detail::TabSpec;
use crate::shared::validation::{FieldErrors, ValidationRules, SLUG_PATTERN};

crate::badge_enum! {
    pub enum ContentStatus {
        Published => ("published", "Published", Success),
        Draft => ("draft", "Draft", Neutral),
        Scheduled => ("scheduled", "Scheduled", Info),
    }
}

crate::badge_enum! {
    pub enum ContentSection {
        Banner => ("banner", "Banner", Primary),
        Faq => ("faq", "FAQ", Info),
        Page => ("page", "Page", Neutral),
        Announcement => ("announcement", "Announcement", Warning),
    }
}

static DETAIL_TABS: [TabSpec; 2] = [
    TabSpec::new("content", "Content"),
    TabSpec::new("details", "Details"),
];

/// Блок контента сайта (баннер, FAQ, страница)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub section: ContentSection,
    pub body: String,
    pub status: ContentStatus,
    pub publish_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Record for SiteContent {
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
            );
        if self.status == ContentStatus::Scheduled && self.publish_at.is_none() {
            errors.add("publish_at", "Scheduled content needs a publish date");
        }
        errors.into_result()
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "site_content"
    }

    fn element_name() -> &'static str {
        "Content block"
    }

    fn list_name() -> &'static str {
        "Site content"
    }

    fn id_prefix() -> &'static str {
        "CNT"
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        ContentStatus::options()
    }

    fn detail_tabs() -> &'static [TabSpec] {
        &DETAIL_TABS
    }
}
