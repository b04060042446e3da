//! Runtime lookup of a badge by kind name, for values that arrive as plain strings

use crate::domain::a001_user::aggregate::{UserRole, UserStatus};
use crate::domain::a002_order::aggregate::OrderStatus;
use crate::domain::a003_product::aggregate::ProductStatus;
use crate::domain::a004_category::aggregate::CategoryStatus;
use crate::domain::a005_payment::aggregate::{PaymentMethod, PaymentStatus};
use crate::domain::a006_complaint::aggregate::{ComplaintPriority, ComplaintStatus};
use crate::domain::a007_package::aggregate::{BillingCycle, PackageStatus};
use crate::domain::a008_policy::aggregate::{PolicyKind, PolicyStatus};
use crate::domain::a009_ai_model::aggregate::AiModelStatus;
use crate::domain::a010_site_content::aggregate::{ContentSection, ContentStatus};
use crate::shared::badge::Badge;

/// Resolve `raw` for the enum named by `kind` (e.g. `"order_status"`).
///
/// Total: an unknown kind or value yields a neutral badge with the raw text.
pub fn resolve_badge(kind: &str, raw: &str) -> Badge {
    match kind {
        "user_status" => Badge::resolve::<UserStatus>(raw),
        "user_role" => Badge::resolve::<UserRole>(raw),
        "order_status" => Badge::resolve::<OrderStatus>(raw),
        "product_status" => Badge::resolve::<ProductStatus>(raw),
        "category_status" => Badge::resolve::<CategoryStatus>(raw),
        "payment_status" => Badge::resolve::<PaymentStatus>(raw),
        "payment_method" => Badge::resolve::<PaymentMethod>(raw),
        "complaint_status" => Badge::resolve::<ComplaintStatus>(raw),
        "complaint_priority" => Badge::resolve::<ComplaintPriority>(raw),
        "package_status" => Badge::resolve::<PackageStatus>(raw),
        "billing_cycle" => Badge::resolve::<BillingCycle>(raw),
        "policy_status" => Badge::resolve::<PolicyStatus>(raw),
        "policy_kind" => Badge::resolve::<PolicyKind>(raw),
        "ai_model_status" => Badge::resolve::<AiModelStatus>(raw),
        "content_status" => Badge::resolve::<ContentStatus>(raw),
        "content_section" => Badge::resolve::<ContentSection>(raw),
        _ => Badge::neutral(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::badge::Tone;

    #[test]
    fn test_known_kinds() {
        assert_eq!(resolve_badge("order_status", "shipped").tone, Tone::Primary);
        assert_eq!(resolve_badge("complaint_priority", "urgent").tone, Tone::Danger);
        assert_eq!(resolve_badge("product_status", "out_of_stock").label, "Out of stock");
        assert_eq!(resolve_badge("user_role", "admin").tone, Tone::Primary);
    }

    #[test]
    fn test_total_for_any_input() {
        for (kind, raw) in [
            ("order_status", "lost_in_space"),
            ("no_such_kind", "pending"),
            ("", ""),
            ("payment_status", "🚀"),
        ] {
            let badge = resolve_badge(kind, raw);
            assert_eq!(badge.tone, Tone::Neutral);
            assert_eq!(badge.label, raw);
        }
    }
}
