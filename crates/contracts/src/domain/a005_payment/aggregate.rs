use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::badge::{Badge, BadgeValue};
use crate::shared::detail::TabSpec;
use crate::shared::validation::{FieldErrors, ValidationRules};

crate::badge_enum! {
    pub enum PaymentStatus {
        Completed => ("completed", "Completed", Success),
        Pending => ("pending", "Pending", Warning),
        Failed => ("failed", "Failed", Danger),
        Refunded => ("refunded", "Refunded", Info),
    }
}

crate::badge_enum! {
    /// Способ оплаты
    pub enum PaymentMethod {
        Card => ("card", "Card", Primary),
        Paypal => ("paypal", "PayPal", Info),
        BankTransfer => ("bank_transfer", "Bank transfer", Neutral),
        Cash => ("cash", "Cash on delivery", Neutral),
    }
}

static DETAIL_TABS: [TabSpec; 2] = [
    TabSpec::new("overview", "Overview"),
    TabSpec::new("order", "Order"),
];

/// Платёж по заказу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    /// Неформальная ссылка на `Order::id`
    pub order_id: String,
    pub customer_name: String,
    pub amount: f64,
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub transaction_ref: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Payment {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.id
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
        vec![
            self.id.as_str(),
            self.order_id.as_str(),
            self.customer_name.as_str(),
            self.transaction_ref.as_str(),
        ]
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .string("order_id", "Order", &self.order_id, ValidationRules::required())
            .string(
                "currency",
                "Currency",
                &self.currency,
                ValidationRules::required().with_pattern(r"^[A-Z]{3}$", "Currency must be a 3-letter ISO code"),
            )
            .number(
                "amount",
                "Amount",
                self.amount,
                ValidationRules::none().with_range(Some(0.01), None),
            );
        errors.into_result()
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "payments"
    }

    fn element_name() -> &'static str {
        "Payment"
    }

    fn list_name() -> &'static str {
        "Payments"
    }

    fn id_prefix() -> &'static str {
        "PAY"
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        PaymentStatus::options()
    }

    fn detail_tabs() -> &'static [TabSpec] {
        &DETAIL_TABS
    }
}
