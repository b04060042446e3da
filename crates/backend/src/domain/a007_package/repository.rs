use contracts::domain::a007_package::aggregate::{BillingCycle, Package, PackageStatus};
use contracts::domain::common::utc_date;
use once_cell::sync::Lazy;

use crate::shared::data::mock_store::MockStore;

static STORE: Lazy<MockStore<Package>> = Lazy::new(|| MockStore::new(fixtures()));

pub fn store() -> &'static MockStore<Package> {
    &STORE
}

fn package(
    n: u32,
    name: &str,
    price: f64,
    billing_cycle: BillingCycle,
    features: &[&str],
    subscribers: u32,
    status: PackageStatus,
) -> Package {
    Package {
        id: format!("PKG-{:03}", n),
        name: name.to_string(),
        price,
        billing_cycle,
        features: features.iter().map(|f| f.to_string()).collect(),
        subscribers,
        status,
        created_at: utc_date(2023, 10, n),
    }
}

fn fixtures() -> Vec<Package> {
    use BillingCycle::*;
    use PackageStatus::*;
    vec![
        package(1, "Starter", 9.0, Monthly, &["Up to 50 products", "Basic analytics", "Email support"], 184, Active),
        package(2, "Growth", 29.0, Monthly, &["Up to 1 000 products", "Advanced analytics", "Discount codes", "Priority support"], 96, Active),
        package(3, "Business", 290.0, Yearly, &["Unlimited products", "Multi-warehouse stock", "API access", "Dedicated manager"], 31, Active),
        package(4, "Enterprise", 990.0, Yearly, &["Everything in Business", "SSO", "Custom SLA"], 0, Draft),
        package(5, "Legacy Basic", 5.0, Monthly, &["Up to 20 products"], 12, Inactive),
    ]
}
