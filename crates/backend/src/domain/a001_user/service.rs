use contracts::domain::a001_user::aggregate::User;
use contracts::shared::detail::{RelatedList, RelatedRow};

use super::repository;
use crate::domain::a002_order;
use crate::shared::data::collection::Collection;
use crate::shared::data::mock_store::MockStore;

impl Collection for User {
    fn store() -> &'static MockStore<Self> {
        repository::store()
    }

    /// Заказы пользователя ищутся по email покупателя
    fn related(&self) -> Vec<RelatedList> {
        let rows = a002_order::service::orders_for_email(&self.email)
            .iter()
            .map(|order| {
                RelatedRow::from_record(
                    order,
                    Some(format!("{:.2} · {}", order.total, order.created_at.format("%Y-%m-%d"))),
                )
            })
            .collect();
        vec![RelatedList {
            tab: "orders".to_string(),
            rows,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;

    #[test]
    fn test_user_orders_by_email() {
        let user = repository::store().find("USR-002").cloned().unwrap();
        let related = user.related();
        assert_eq!(related[0].tab, "orders");
        assert!(!related[0].rows.is_empty());
        assert!(related[0].rows.iter().all(|r| r.collection == "a002_orders"));
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let records = repository::store().records();
        let mut ids: Vec<&str> = records.iter().map(|u| u.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
        assert!(records.iter().all(|u| u.validate().is_ok()));
    }
}
