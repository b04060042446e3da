use contracts::domain::a005_payment::aggregate::{Payment, PaymentMethod, PaymentStatus};
use contracts::domain::common::utc_date;
use once_cell::sync::Lazy;

use crate::shared::data::mock_store::MockStore;

static STORE: Lazy<MockStore<Payment>> = Lazy::new(|| MockStore::new(fixtures()));

pub fn store() -> &'static MockStore<Payment> {
    &STORE
}

#[allow(clippy::too_many_arguments)]
fn payment(
    n: u32,
    order_id: &str,
    customer_name: &str,
    amount: f64,
    currency: &str,
    method: PaymentMethod,
    status: PaymentStatus,
    created: (i32, u32, u32),
) -> Payment {
    Payment {
        id: format!("PAY-{:03}", n),
        order_id: order_id.to_string(),
        customer_name: customer_name.to_string(),
        amount,
        currency: currency.to_string(),
        method,
        status,
        transaction_ref: format!("txn_{:08x}", 0x5eed_0000_u32 + n * 7919),
        created_at: utc_date(created.0, created.1, created.2),
    }
}

fn fixtures() -> Vec<Payment> {
    use PaymentMethod::*;
    use PaymentStatus::*;
    vec![
        payment(1, "ORD-1001", "Liam Carter", 199.99, "USD", Card, Completed, (2024, 1, 12)),
        payment(2, "ORD-1002", "Sophia Nguyen", 187.0, "USD", Paypal, Completed, (2024, 1, 27)),
        payment(3, "ORD-1003", "Emma Rossi", 78.0, "EUR", Card, Completed, (2024, 2, 9)),
        payment(4, "ORD-1004", "Liam Carter", 649.98, "USD", Card, Completed, (2024, 2, 22)),
        payment(5, "ORD-1005", "Ava Schmidt", 79.99, "EUR", Cash, Failed, (2024, 3, 4)),
        payment(6, "ORD-1006", "Ethan Lopez", 1498.99, "EUR", BankTransfer, Completed, (2024, 3, 18)),
        payment(7, "ORD-1007", "Isabella Chen", 45.0, "USD", Paypal, Completed, (2024, 3, 30)),
        payment(8, "ORD-1008", "Mia Johnson", 129.8, "USD", Card, Completed, (2024, 4, 7)),
        payment(9, "ORD-1009", "Emma Rossi", 111.0, "EUR", Card, Completed, (2024, 4, 16)),
        payment(10, "ORD-1010", "Daniel Brooks", 249.0, "AUD", Card, Pending, (2024, 4, 29)),
        payment(11, "ORD-1012", "Ethan Lopez", 499.99, "EUR", Card, Completed, (2024, 5, 14)),
        payment(12, "ORD-1013", "Mia Johnson", 364.88, "USD", Card, Completed, (2024, 5, 25)),
        payment(13, "ORD-1006", "Ethan Lopez", 199.99, "EUR", BankTransfer, Refunded, (2024, 4, 2)),
    ]
}
