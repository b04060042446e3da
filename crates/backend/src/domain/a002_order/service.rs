use chrono::Datelike;
use contracts::domain::a002_order::aggregate::{Order, OrderStatus};
use contracts::domain::common::Record;
use contracts::shared::badge::BadgeValue;
use contracts::shared::detail::{RelatedList, RelatedRow};

use super::repository;
use crate::domain::a005_payment;
use crate::shared::data::collection::Collection;
use crate::shared::data::mock_store::MockStore;

impl Collection for Order {
    fn store() -> &'static MockStore<Self> {
        repository::store()
    }

    fn related(&self) -> Vec<RelatedList> {
        let rows = a005_payment::service::payments_for_order(&self.id)
            .iter()
            .map(|p| {
                RelatedRow::from_record(
                    p,
                    Some(format!("{:.2} {} · {}", p.amount, p.currency, p.method.label())),
                )
            })
            .collect();
        vec![RelatedList {
            tab: "payments".to_string(),
            rows,
        }]
    }
}

/// Заказы покупателя (email сравнивается без учёта регистра)
pub fn orders_for_email(email: &str) -> Vec<Order> {
    let email = email.trim();
    repository::store()
        .records()
        .iter()
        .filter(|o| o.customer_email.eq_ignore_ascii_case(email))
        .cloned()
        .collect()
}

pub fn count_by_status(status: OrderStatus) -> usize {
    repository::store()
        .records()
        .iter()
        .filter(|o| o.status == status)
        .count()
}

/// Выручка по завершённым заказам
pub fn completed_revenue() -> f64 {
    repository::store()
        .records()
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .map(|o| o.total)
        .sum()
}

/// Выручка завершённых заказов по месяцам `(год, месяц)` в хронологическом порядке
pub fn revenue_by_month() -> Vec<((i32, u32), f64)> {
    let mut months: Vec<((i32, u32), f64)> = Vec::new();
    let mut orders: Vec<&Order> = repository::store()
        .records()
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .collect();
    orders.sort_by_key(|o| o.created_at());

    for order in orders {
        let key = (order.created_at.year(), order.created_at.month());
        match months.last_mut() {
            Some((month, sum)) if *month == key => *sum += order.total,
            _ => months.push((key, order.total)),
        }
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_payment::aggregate::PaymentMethod;

    #[test]
    fn test_orders_for_email_ignores_case() {
        let orders = orders_for_email("  LIAM.CARTER@example.com ");
        assert_eq!(orders.len(), 3);
        assert!(orders_for_email("nobody@example.com").is_empty());
    }

    #[test]
    fn test_order_totals_match_items() {
        for order in repository::store().records() {
            assert!((order.total - order.items_total()).abs() < 0.01, "{}", order.id);
            assert!(order.validate().is_ok(), "{}", order.id);
        }
    }

    #[test]
    fn test_revenue_by_month_is_chronological() {
        let months = revenue_by_month();
        assert!(months.windows(2).all(|w| w[0].0 < w[1].0));
        let sum: f64 = months.iter().map(|(_, v)| v).sum();
        assert!((sum - completed_revenue()).abs() < 1e-6);
    }

    #[test]
    fn test_order_detail_lists_payments() {
        let order = repository::store().find("ORD-1001").cloned().unwrap();
        assert_eq!(order.payment_method, PaymentMethod::Card);
        let related = order.related();
        assert_eq!(related[0].tab, "payments");
        assert_eq!(related[0].rows.len(), 1);
    }
}
