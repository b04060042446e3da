use contracts::domain::a009_ai_model::aggregate::AiModel;

use super::repository;
use crate::shared::data::collection::Collection;
use crate::shared::data::mock_store::MockStore;

impl Collection for AiModel {
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
        for model in repository::store().records() {
            assert!(model.validate().is_ok(), "{}", model.id);
        }
    }
}
