use contracts::domain::a002_order::aggregate::{Order, OrderItem, OrderStatus};
use contracts::domain::a005_payment::aggregate::PaymentMethod;
use contracts::domain::common::utc_date;
use once_cell::sync::Lazy;

use crate::shared::data::mock_store::MockStore;

static STORE: Lazy<MockStore<Order>> = Lazy::new(|| MockStore::new(fixtures()));

pub fn store() -> &'static MockStore<Order> {
    &STORE
}

fn item(product_id: &str, name: &str, quantity: u32, unit_price: f64) -> OrderItem {
    OrderItem {
        product_id: product_id.to_string(),
        name: name.to_string(),
        quantity,
        unit_price,
    }
}

fn order(
    n: u32,
    customer: (&str, &str),
    items: Vec<OrderItem>,
    payment_method: PaymentMethod,
    address: &str,
    status: OrderStatus,
    created: (i32, u32, u32),
) -> Order {
    let total = items.iter().map(OrderItem::amount).sum::<f64>();
    Order {
        id: format!("ORD-{}", 1000 + n),
        customer_name: customer.0.to_string(),
        customer_email: customer.1.to_string(),
        items,
        total: (total * 100.0).round() / 100.0,
        payment_method,
        shipping_address: address.to_string(),
        status,
        created_at: utc_date(created.0, created.1, created.2),
    }
}

fn fixtures() -> Vec<Order> {
    use OrderStatus::*;
    use PaymentMethod::*;

    let liam = ("Liam Carter", "liam.carter@example.com");
    let sophia = ("Sophia Nguyen", "sophia.nguyen@example.com");
    let emma = ("Emma Rossi", "emma.rossi@example.com");
    let ava = ("Ava Schmidt", "ava.schmidt@example.com");
    let ethan = ("Ethan Lopez", "ethan.lopez@example.com");
    let isabella = ("Isabella Chen", "isabella.chen@example.com");
    let mia = ("Mia Johnson", "mia.johnson@example.com");
    let guest = ("Daniel Brooks", "d.brooks@example.net");

    vec![
        order(1, liam, vec![item("PRD-001", "Wireless Headphones", 1, 199.99)], Card, "12 Elm St, Springfield", Completed, (2024, 1, 12)),
        order(2, sophia, vec![item("PRD-005", "Ceramic Pour-Over Set", 2, 54.50), item("PRD-006", "Arabica Beans 1kg", 3, 26.0)], Paypal, "88 Market St, San Francisco", Completed, (2024, 1, 27)),
        order(3, emma, vec![item("PRD-009", "Yoga Mat", 2, 39.0)], Card, "Via Appia 21, Roma", Completed, (2024, 2, 9)),
        order(4, liam, vec![item("PRD-002", "Mechanical Keyboard", 1, 149.99), item("PRD-003", "4K Monitor", 1, 499.99)], Card, "12 Elm St, Springfield", Completed, (2024, 2, 22)),
        order(5, ava, vec![item("PRD-010", "Running Shoes", 1, 79.99)], Cash, "Torstraße 5, Berlin", Cancelled, (2024, 3, 4)),
        order(6, ethan, vec![item("PRD-004", "Ultrabook 14\"", 1, 1299.0), item("PRD-001", "Wireless Headphones", 1, 199.99)], BankTransfer, "Calle Mayor 10, Madrid", Completed, (2024, 3, 18)),
        order(7, isabella, vec![item("PRD-007", "Hardcover Notebook", 3, 15.0)], Paypal, "401 N Wabash Ave, Chicago", Completed, (2024, 3, 30)),
        order(8, mia, vec![item("PRD-008", "Desk Lamp", 2, 64.90)], Card, "600 Congress Ave, Austin", Shipped, (2024, 4, 7)),
        order(9, emma, vec![item("PRD-011", "Resistance Bands", 4, 18.0), item("PRD-009", "Yoga Mat", 1, 39.0)], Card, "Via Appia 21, Roma", Completed, (2024, 4, 16)),
        order(10, guest, vec![item("PRD-012", "Smart Watch", 1, 249.0)], Card, "7 Harbour Rd, Sydney", Processing, (2024, 4, 29)),
        order(11, sophia, vec![item("PRD-006", "Arabica Beans 1kg", 2, 26.0)], Paypal, "88 Market St, San Francisco", Pending, (2024, 5, 6)),
        order(12, ethan, vec![item("PRD-003", "4K Monitor", 1, 499.99)], Card, "Calle Mayor 10, Madrid", Shipped, (2024, 5, 14)),
        order(13, mia, vec![item("PRD-002", "Mechanical Keyboard", 2, 149.99), item("PRD-008", "Desk Lamp", 1, 64.90)], Card, "600 Congress Ave, Austin", Completed, (2024, 5, 25)),
        order(14, liam, vec![item("PRD-012", "Smart Watch", 1, 249.0), item("PRD-011", "Resistance Bands", 2, 18.0)], Paypal, "12 Elm St, Springfield", Processing, (2024, 6, 3)),
        order(15, guest, vec![item("PRD-005", "Ceramic Pour-Over Set", 1, 54.50)], Cash, "7 Harbour Rd, Sydney", Pending, (2024, 6, 11)),
    ]
}
