use contracts::domain::a008_policy::aggregate::Policy;

use super::repository;
use crate::shared::data::collection::Collection;
use crate::shared::data::mock_store::MockStore;

impl Collection for Policy {
    fn store() -> &'static MockStore<Self> {
        repository::store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;

    #[test]
    fn test_fixtures_are_valid() {
        for policy in repository::store().records() {
            assert!(policy.validate().is_ok(), "{}", policy.id);
        }
    }
}
