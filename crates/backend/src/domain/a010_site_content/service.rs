use contracts::domain::a010_site_content::aggregate::SiteContent;

use super::repository;
use crate::shared::data::collection::Collection;
use crate::shared::data::mock_store::MockStore;

impl Collection for SiteContent {
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
        for content in repository::store().records() {
            assert!(content.validate().is_ok(), "{}", content.id);
        }
    }
}
