use contracts::domain::a010_site_content::aggregate::{ContentSection, ContentStatus, SiteContent};
use contracts::domain::common::utc_date;
use once_cell::sync::Lazy;

use crate::shared::data::mock_store::MockStore;

static STORE: Lazy<MockStore<SiteContent>> = Lazy::new(|| MockStore::new(fixtures()));

pub fn store() -> &'static MockStore<SiteContent> {
    &STORE
}

fn content(
    n: u32,
    title: &str,
    slug: &str,
    section: ContentSection,
    status: ContentStatus,
    publish_at: Option<(i32, u32, u32)>,
    body: &str,
) -> SiteContent {
    SiteContent {
        id: format!("CNT-{:03}", n),
        title: title.to_string(),
        slug: slug.to_string(),
        section,
        body: body.to_string(),
        status,
        publish_at: publish_at.map(|(y, m, d)| utc_date(y, m, d)),
        created_at: utc_date(2024, 4, n),
    }
}

fn fixtures() -> Vec<SiteContent> {
    use ContentSection::*;
    use ContentStatus::*;
    vec![
        content(1, "Summer sale banner", "summer-sale", Banner, Scheduled, Some((2024, 7, 1)), "Up to 40% off sports and fitness. 1 to 14 July."),
        content(2, "How long does shipping take?", "faq-shipping-time", Faq, Published, Some((2024, 4, 2)), "Orders ship within 2 business days. Delivery takes 3 to 5 days domestically."),
        content(3, "About us", "about-us", Page, Published, Some((2024, 4, 3)), "We are a small team selling things we use ourselves."),
        content(4, "Holiday support hours", "holiday-support-hours", Announcement, Draft, None, "Support is closed on public holidays."),
        content(5, "Can I change my order?", "faq-change-order", Faq, Published, Some((2024, 4, 5)), "You can change an order until it is marked as shipped."),
    ]
}
