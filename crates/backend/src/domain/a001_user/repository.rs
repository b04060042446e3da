use chrono::Duration;
use contracts::domain::a001_user::aggregate::{User, UserRole, UserStatus};
use contracts::domain::common::utc_date;
use once_cell::sync::Lazy;

use crate::shared::data::mock_store::MockStore;

static STORE: Lazy<MockStore<User>> = Lazy::new(|| MockStore::new(fixtures()));

pub fn store() -> &'static MockStore<User> {
    &STORE
}

#[allow(clippy::too_many_arguments)]
fn user(
    n: u32,
    name: &str,
    email: &str,
    phone: &str,
    role: UserRole,
    status: UserStatus,
    orders_count: u32,
    total_spent: f64,
    created: (i32, u32, u32),
) -> User {
    let created_at = utc_date(created.0, created.1, created.2);
    User {
        id: format!("USR-{:03}", n),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role,
        status,
        orders_count,
        total_spent,
        last_login: (status == UserStatus::Active).then(|| created_at + Duration::days(40)),
        created_at,
    }
}

fn fixtures() -> Vec<User> {
    use UserRole::*;
    use UserStatus::*;
    vec![
        user(1, "Olivia Bennett", "olivia.bennett@example.com", "+1 202 555 0141", Admin, Active, 0, 0.0, (2023, 11, 2)),
        user(2, "Liam Carter", "liam.carter@example.com", "+1 202 555 0178", Customer, Active, 3, 1249.97, (2024, 1, 8)),
        user(3, "Sophia Nguyen", "sophia.nguyen@example.com", "+1 415 555 0112", Customer, Active, 2, 389.50, (2024, 1, 19)),
        user(4, "Noah Patel", "noah.patel@example.com", "+44 20 7946 0958", Vendor, Pending, 0, 0.0, (2024, 2, 3)),
        user(5, "Emma Rossi", "emma.rossi@example.com", "+39 06 5555 0199", Customer, Active, 2, 534.00, (2024, 2, 14)),
        user(6, "Mason Kim", "mason.kim@example.com", "+1 646 555 0190", Manager, Active, 0, 0.0, (2024, 2, 27)),
        user(7, "Ava Schmidt", "ava.schmidt@example.com", "+49 30 5555 0147", Customer, Suspended, 1, 79.99, (2024, 3, 5)),
        user(8, "Ethan Lopez", "ethan.lopez@example.com", "+34 91 555 0123", Customer, Active, 2, 1870.00, (2024, 3, 21)),
        user(9, "Isabella Chen", "isabella.chen@example.com", "+1 312 555 0166", Customer, Inactive, 1, 45.00, (2024, 4, 2)),
        user(10, "Lucas Martin", "lucas.martin@example.com", "+33 1 5555 0104", Vendor, Active, 0, 0.0, (2024, 4, 18)),
        user(11, "Mia Johnson", "mia.johnson@example.com", "+1 737 555 0183", Customer, Active, 2, 642.40, (2024, 5, 9)),
        user(12, "James Wilson", "james.wilson@example.com", "+61 2 5550 1234", Customer, Pending, 0, 0.0, (2024, 6, 1)),
    ]
}
