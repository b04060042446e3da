use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::badge::{Badge, BadgeValue};
use crate::shared::detail::TabSpec;
use crate::shared::validation::{FieldErrors, ValidationRules, SLUG_PATTERN};

crate::badge_enum! {
    pub enum CategoryStatus {
        Active => ("active", "Active", Success),
        Inactive => ("inactive", "Inactive", Neutral),
    }
}

static DETAIL_TABS: [TabSpec; 3] = [
    TabSpec::new("overview", "Overview"),
    TabSpec::new("products", "Products"),
    TabSpec::new("subcategories", "Subcategories"),
];

/// Категория каталога. Иерархия задаётся `parent_id` без проверки ссылок.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<String>,
    pub description: String,
    pub products_count: u32,
    pub status: CategoryStatus,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_child_of(&self, parent_id: &str) -> bool {
        self.parent_id.as_deref() == Some(parent_id)
    }
}

impl Record for Category {
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
        vec![self.id.as_str(), self.name.as_str(), self.slug.as_str()]
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .string("name", "Name", &self.name, ValidationRules::required().with_max_length(80))
            .string(
                "slug",
                "Slug",
                &self.slug,
                ValidationRules::required().with_pattern(
                    SLUG_PATTERN,
                    "Slug may only contain lowercase letters, digits and single dashes",
                ),
            );
        if self.parent_id.as_deref() == Some(self.id.as_str()) && !self.id.is_empty() {
            errors.add("parent_id", "A category cannot be its own parent");
        }
        errors.into_result()
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }

    fn id_prefix() -> &'static str {
        "CAT"
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        CategoryStatus::options()
    }

    fn detail_tabs() -> &'static [TabSpec] {
        &DETAIL_TABS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::utc_date;

    fn sample() -> Category {
        Category {
            id: "CAT-004".into(),
            name: "Home Audio".into(),
            slug: "home-audio".into(),
            parent_id: Some("CAT-001".into()),
            description: String::new(),
            products_count: 12,
            status: CategoryStatus::Active,
            created_at: utc_date(2024, 2, 1),
        }
    }

    #[test]
    fn test_parent_links() {
        let category = sample();
        assert!(!category.is_root());
        assert!(category.is_child_of("CAT-001"));
        assert!(!category.is_child_of("CAT-002"));
    }

    #[test]
    fn test_slug_and_self_parent() {
        assert!(sample().validate().is_ok());

        let mut bad = sample();
        bad.slug = "Home Audio".into();
        bad.parent_id = Some("CAT-004".into());
        let errors = bad.validate().unwrap_err();
        assert!(errors.get("slug").is_some());
        assert!(errors.get("parent_id").is_some());
    }
}
