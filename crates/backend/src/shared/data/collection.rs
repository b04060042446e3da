use contracts::domain::common::Record;
use contracts::shared::detail::{RecordDetail, RelatedList};
use contracts::shared::list_query::{ListQuery, Page};
use contracts::shared::mutation::MutationAck;

use super::mock_store::MockStore;
use super::repository::RecordRepository;
use crate::shared::error::ApiError;

/// Коллекция, доступная через REST: своё хранилище плюс связанные списки для вкладок
pub trait Collection: Record {
    fn store() -> &'static MockStore<Self>;

    /// Связанные записи для вкладок детального просмотра
    fn related(&self) -> Vec<RelatedList> {
        Vec::new()
    }
}

pub async fn list<T: Collection>(query: &ListQuery) -> anyhow::Result<Page<T>> {
    T::store().list(query).await
}

pub async fn list_all<T: Collection>() -> anyhow::Result<Vec<T>> {
    T::store().all().await
}

pub async fn get_detail<T: Collection>(id: &str) -> anyhow::Result<Option<RecordDetail<T>>> {
    let Some(record) = T::store().get(id).await? else {
        tracing::info!(collection = T::collection_name(), id = id, "record not found");
        return Ok(None);
    };
    let related = record.related();
    Ok(Some(RecordDetail { record, related }))
}

/// Пустой id — создание, иначе обновление существующей записи
pub async fn upsert<T: Collection>(record: T) -> Result<MutationAck, ApiError> {
    if record.id().trim().is_empty() {
        T::store().create(record).await
    } else {
        T::store().update(record).await
    }
}

pub async fn delete<T: Collection>(id: &str) -> Result<MutationAck, ApiError> {
    T::store().delete(id).await
}
