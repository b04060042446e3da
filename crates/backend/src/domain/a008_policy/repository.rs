use contracts::domain::a008_policy::aggregate::{Policy, PolicyKind, PolicyStatus};
use contracts::domain::common::utc_date;
use once_cell::sync::Lazy;

use crate::shared::data::mock_store::MockStore;

static STORE: Lazy<MockStore<Policy>> = Lazy::new(|| MockStore::new(fixtures()));

pub fn store() -> &'static MockStore<Policy> {
    &STORE
}

#[allow(clippy::too_many_arguments)]
fn policy(
    n: u32,
    title: &str,
    slug: &str,
    kind: PolicyKind,
    version: &str,
    status: PolicyStatus,
    updated: (i32, u32, u32),
    content: &str,
) -> Policy {
    Policy {
        id: format!("POL-{:03}", n),
        title: title.to_string(),
        slug: slug.to_string(),
        kind,
        version: version.to_string(),
        content: content.to_string(),
        status,
        updated_at: utc_date(updated.0, updated.1, updated.2),
        created_at: utc_date(2023, 9, n),
    }
}

fn fixtures() -> Vec<Policy> {
    use PolicyKind::*;
    use PolicyStatus::*;
    vec![
        policy(
            1,
            "Privacy Policy",
            "privacy-policy",
            Privacy,
            "2.1",
            Published,
            (2024, 2, 1),
            "We collect only the data required to process your orders.\n\nPersonal data is never sold to third parties. You may request export or deletion of your data at any time.",
        ),
        policy(
            2,
            "Terms of Service",
            "terms-of-service",
            Terms,
            "3.0",
            Published,
            (2024, 1, 15),
            "By placing an order you agree to these terms.\n\nPrices include VAT where applicable. We reserve the right to cancel orders with pricing errors.",
        ),
        policy(
            3,
            "Refund Policy",
            "refund-policy",
            Refund,
            "1.4",
            Published,
            (2024, 3, 10),
            "Items can be returned within 30 days of delivery.\n\nRefunds are issued to the original payment method within 5 business days.",
        ),
        policy(
            4,
            "Shipping Policy",
            "shipping-policy",
            Shipping,
            "1.0",
            Draft,
            (2024, 6, 2),
            "Orders ship within 2 business days.\n\nInternational delivery takes 7 to 14 days.",
        ),
        policy(
            5,
            "Refund Policy (2022)",
            "refund-policy-2022",
            Refund,
            "1.0",
            Archived,
            (2022, 12, 1),
            "Items can be returned within 14 days of delivery.",
        ),
    ]
}
