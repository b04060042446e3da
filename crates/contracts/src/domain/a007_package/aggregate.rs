use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::badge::{Badge, BadgeValue};
use crate::shared::detail::TabSpec;
use crate::shared::validation::{FieldErrors, ValidationRules};

crate::badge_enum! {
    pub enum PackageStatus {
        Active => ("active", "Active", Success),
        Inactive => ("inactive", "Inactive", Neutral),
        Draft => ("draft", "Draft", Warning),
    }
}

crate::badge_enum! {
    pub enum BillingCycle {
        Monthly => ("monthly", "Monthly", Info),
        Yearly => ("yearly", "Yearly", Primary),
    }
}

static DETAIL_TABS: [TabSpec; 2] = [
    TabSpec::new("overview", "Overview"),
    TabSpec::new("features", "Features"),
];

/// Тарифный пакет для продавцов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub features: Vec<String>,
    pub subscribers: u32,
    pub status: PackageStatus,
    pub created_at: DateTime<Utc>,
}

impl Package {
    /// Цена, приведённая к месяцу
    pub fn monthly_price(&self) -> f64 {
        match self.billing_cycle {
            BillingCycle::Monthly => self.price,
            BillingCycle::Yearly => self.price / 12.0,
        }
    }

    /// Ожидаемая месячная выручка с подписчиков
    pub fn monthly_revenue(&self) -> f64 {
        self.monthly_price() * f64::from(self.subscribers)
    }
}

impl Record for Package {
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
        let mut fields = vec![self.id.as_str(), self.name.as_str()];
        fields.extend(self.features.iter().map(String::as_str));
        fields
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .string("name", "Name", &self.name, ValidationRules::required().with_max_length(60))
            .number(
                "price",
                "Price",
                self.price,
                ValidationRules::none().with_range(Some(0.0), Some(100_000.0)),
            );
        if self.features.iter().any(|f| f.trim().is_empty()) {
            errors.add("features", "Features cannot be blank");
        }
        errors.into_result()
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "packages"
    }

    fn element_name() -> &'static str {
        "Package"
    }

    fn list_name() -> &'static str {
        "Packages"
    }

    fn id_prefix() -> &'static str {
        "PKG"
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        PackageStatus::options()
    }

    fn detail_tabs() -> &'static [TabSpec] {
        &DETAIL_TABS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::utc_date;

    #[test]
    fn test_monthly_revenue() {
        let package = Package {
            id: "PKG-002".into(),
            name: "Pro".into(),
            price: 240.0,
            billing_cycle: BillingCycle::Yearly,
            features: vec!["Priority support".into()],
            subscribers: 10,
            status: PackageStatus::Active,
            created_at: utc_date(2024, 1, 1),
        };
        assert_eq!(package.monthly_price(), 20.0);
        assert_eq!(package.monthly_revenue(), 200.0);
        assert!(package.search_fields().contains(&"Priority support"));
    }
}
