use contracts::domain::a003_product::aggregate::{Product, ProductStatus};
use contracts::domain::common::utc_date;
use once_cell::sync::Lazy;

use crate::shared::data::mock_store::MockStore;

static STORE: Lazy<MockStore<Product>> = Lazy::new(|| MockStore::new(fixtures()));

pub fn store() -> &'static MockStore<Product> {
    &STORE
}

#[allow(clippy::too_many_arguments)]
fn product(
    n: u32,
    name: &str,
    sku: &str,
    category_id: &str,
    price: f64,
    stock: u32,
    status: ProductStatus,
    description: &str,
) -> Product {
    Product {
        id: format!("PRD-{:03}", n),
        name: name.to_string(),
        sku: sku.to_string(),
        category_id: category_id.to_string(),
        price,
        stock,
        description: description.to_string(),
        status,
        created_at: utc_date(2024, 1, n.min(28)),
    }
}

fn fixtures() -> Vec<Product> {
    use ProductStatus::*;
    vec![
        product(1, "Wireless Headphones", "AUD-WH-100", "CAT-002", 199.99, 45, Active, "Over-ear, active noise cancelling, 30h battery."),
        product(2, "Mechanical Keyboard", "CMP-KB-87", "CAT-003", 149.99, 8, Active, "Tenkeyless layout with hot-swappable switches."),
        product(3, "4K Monitor", "CMP-MON-27", "CAT-003", 499.99, 0, OutOfStock, "27 inch IPS panel, USB-C with 90W power delivery."),
        product(4, "Ultrabook 14\"", "CMP-UB-14", "CAT-003", 1299.0, 12, Active, "14 inch laptop, 16 GB RAM, 1 TB SSD."),
        product(5, "Ceramic Pour-Over Set", "KIT-POS-2", "CAT-005", 54.50, 30, Active, "Dripper, carafe and 100 paper filters."),
        product(6, "Arabica Beans 1kg", "KIT-ARB-1000", "CAT-005", 26.0, 120, Active, "Single origin, medium roast."),
        product(7, "Hardcover Notebook", "STN-NB-A5", "CAT-006", 15.0, 300, Active, "A5, dotted, 192 pages."),
        product(8, "Desk Lamp", "HOM-LMP-01", "CAT-004", 64.90, 5, Active, "Dimmable LED lamp with adjustable colour temperature."),
        product(9, "Yoga Mat", "SPT-YM-6", "CAT-007", 39.0, 60, Active, "6 mm non-slip mat with carry strap."),
        product(10, "Running Shoes", "SPT-RS-42", "CAT-007", 79.99, 0, Archived, "Lightweight road running shoes."),
        product(11, "Resistance Bands", "SPT-RB-5", "CAT-007", 18.0, 90, Active, "Set of five bands, 5 to 40 kg."),
        product(12, "Smart Watch", "WRB-SW-2", "CAT-008", 249.0, 20, Draft, "Heart rate, GPS and sleep tracking."),
    ]
}
