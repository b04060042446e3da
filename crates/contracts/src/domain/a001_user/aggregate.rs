use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::badge::{Badge, BadgeValue};
use crate::shared::detail::TabSpec;
use crate::shared::validation::{FieldErrors, ValidationRules, EMAIL_PATTERN};

crate::badge_enum! {
    /// Статус учётной записи пользователя
    pub enum UserStatus {
        Active => ("active", "Active", Success),
        Inactive => ("inactive", "Inactive", Neutral),
        Suspended => ("suspended", "Suspended", Danger),
        Pending => ("pending", "Pending", Warning),
    }
}

crate::badge_enum! {
    /// Роль пользователя
    pub enum UserRole {
        Admin => ("admin", "Admin", Primary),
        Manager => ("manager", "Manager", Info),
        Customer => ("customer", "Customer", Neutral),
        Vendor => ("vendor", "Vendor", Warning),
    }
}

static DETAIL_TABS: [TabSpec; 3] = [
    TabSpec::new("profile", "Profile"),
    TabSpec::new("orders", "Orders"),
    TabSpec::new("activity", "Activity"),
];

/// Пользователь (покупатель, продавец или сотрудник)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub orders_count: u32,
    pub total_spent: f64,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Record for User {
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
        vec![self.id.as_str(), self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .string("name", "Name", &self.name, ValidationRules::required().with_max_length(100))
            .string(
                "email",
                "Email",
                &self.email,
                ValidationRules::required().with_pattern(EMAIL_PATTERN, "Email address is not valid"),
            )
            .number(
                "total_spent",
                "Total spent",
                self.total_spent,
                ValidationRules::none().with_range(Some(0.0), None),
            );
        errors.into_result()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn id_prefix() -> &'static str {
        "USR"
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        UserStatus::options()
    }

    fn detail_tabs() -> &'static [TabSpec] {
        &DETAIL_TABS
    }
}
