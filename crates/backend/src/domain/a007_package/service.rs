use contracts::domain::a007_package::aggregate::Package;

use super::repository;
use crate::shared::data::collection::Collection;
use crate::shared::data::mock_store::MockStore;

impl Collection for Package {
    fn store() -> &'static MockStore<Self> {
        repository::store()
    }
}

/// Ожидаемая ежемесячная выручка по всем тарифам
pub fn monthly_recurring_revenue() -> f64 {
    repository::store()
        .records()
        .iter()
        .map(Package::monthly_revenue)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;

    #[test]
    fn test_fixtures_are_valid() {
        for package in repository::store().records() {
            assert!(package.validate().is_ok(), "{}", package.id);
        }
        assert!(monthly_recurring_revenue() > 0.0);
    }
}
