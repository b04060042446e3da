use contracts::domain::a004_category::aggregate::{Category, CategoryStatus};
use contracts::domain::common::utc_date;
use once_cell::sync::Lazy;

use crate::shared::data::mock_store::MockStore;

static STORE: Lazy<MockStore<Category>> = Lazy::new(|| MockStore::new(fixtures()));

pub fn store() -> &'static MockStore<Category> {
    &STORE
}

fn category(
    n: u32,
    name: &str,
    slug: &str,
    parent: Option<u32>,
    products_count: u32,
    status: CategoryStatus,
    description: &str,
) -> Category {
    Category {
        id: format!("CAT-{:03}", n),
        name: name.to_string(),
        slug: slug.to_string(),
        parent_id: parent.map(|p| format!("CAT-{:03}", p)),
        description: description.to_string(),
        products_count,
        status,
        created_at: utc_date(2023, 12, n),
    }
}

fn fixtures() -> Vec<Category> {
    use CategoryStatus::*;
    vec![
        category(1, "Electronics", "electronics", None, 0, Active, "Consumer electronics and accessories."),
        category(2, "Audio", "audio", Some(1), 1, Active, "Headphones, speakers and microphones."),
        category(3, "Computers", "computers", Some(1), 3, Active, "Laptops, monitors and peripherals."),
        category(4, "Home & Kitchen", "home-kitchen", None, 1, Active, "Everything for the home."),
        category(5, "Coffee", "coffee", Some(4), 2, Active, "Beans, brewers and accessories."),
        category(6, "Stationery", "stationery", None, 1, Active, "Notebooks, pens and paper."),
        category(7, "Sports & Fitness", "sports-fitness", None, 3, Active, "Training gear and apparel."),
        category(8, "Wearables", "wearables", Some(1), 1, Inactive, "Smart watches and fitness trackers."),
    ]
}
