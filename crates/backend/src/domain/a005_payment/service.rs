use contracts::domain::a005_payment::aggregate::Payment;
use contracts::shared::detail::{RelatedList, RelatedRow};

use super::repository;
use crate::domain::a002_order;
use crate::shared::data::collection::Collection;
use crate::shared::data::mock_store::MockStore;

impl Collection for Payment {
    fn store() -> &'static MockStore<Self> {
        repository::store()
    }

    /// Вкладка "Order": заказ, к которому относится платёж
    fn related(&self) -> Vec<RelatedList> {
        let rows = a002_order::repository::store()
            .find(&self.order_id)
            .map(|order| {
                RelatedRow::from_record(
                    order,
                    Some(format!("{} · {:.2}", order.customer_name, order.total)),
                )
            })
            .into_iter()
            .collect();
        vec![RelatedList {
            tab: "order".to_string(),
            rows,
        }]
    }
}

pub fn payments_for_order(order_id: &str) -> Vec<Payment> {
    repository::store()
        .records()
        .iter()
        .filter(|p| p.order_id == order_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;

    #[test]
    fn test_every_payment_points_to_an_order() {
        for payment in repository::store().records() {
            assert!(payment.validate().is_ok(), "{}", payment.id);
            assert!(
                a002_order::repository::store().find(&payment.order_id).is_some(),
                "{}",
                payment.id
            );
        }
    }

    #[test]
    fn test_refund_is_listed_with_its_order() {
        let payments = payments_for_order("ORD-1006");
        assert_eq!(payments.len(), 2);
        let payment = repository::store().find("PAY-013").cloned().unwrap();
        assert_eq!(payment.related()[0].rows[0].id, "ORD-1006");
    }
}
