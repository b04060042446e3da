use contracts::domain::a006_complaint::aggregate::Complaint;
use contracts::shared::detail::{RelatedList, RelatedRow};

use super::repository;
use crate::domain::a002_order;
use crate::shared::data::collection::Collection;
use crate::shared::data::mock_store::MockStore;

impl Collection for Complaint {
    fn store() -> &'static MockStore<Self> {
        repository::store()
    }

    /// Заказ, на который жалуется покупатель (если указан)
    fn related(&self) -> Vec<RelatedList> {
        let Some(order_id) = self.order_id.as_deref() else {
            return Vec::new();
        };
        let rows = a002_order::repository::store()
            .find(order_id)
            .map(|order| RelatedRow::from_record(order, Some(order.customer_name.clone())))
            .into_iter()
            .collect();
        vec![RelatedList {
            tab: "order".to_string(),
            rows,
        }]
    }
}

/// Жалобы в статусах open / in_progress
pub fn open_count() -> usize {
    repository::store()
        .records()
        .iter()
        .filter(|c| c.is_open())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;

    #[test]
    fn test_open_count() {
        assert_eq!(open_count(), 4);
    }

    #[test]
    fn test_conversation_is_chronological() {
        for complaint in repository::store().records() {
            assert!(complaint.validate().is_ok(), "{}", complaint.id);
            assert!(complaint.messages.windows(2).all(|w| w[0].sent_at <= w[1].sent_at));
            assert!(complaint.last_activity() >= complaint.created_at);
        }
    }

    #[test]
    fn test_related_order() {
        let complaint = repository::store().find("CMP-001").cloned().unwrap();
        assert_eq!(complaint.related()[0].rows[0].id, "ORD-1006");

        let no_order = repository::store().find("CMP-005").cloned().unwrap();
        assert!(no_order.related().is_empty());
    }
}
