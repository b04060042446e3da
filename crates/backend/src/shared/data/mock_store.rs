use async_trait::async_trait;
use contracts::domain::common::Record;
use contracts::shared::mutation::{MutationAck, MutationAction};
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use super::repository::RecordRepository;
use crate::shared::config;
use crate::shared::error::ApiError;

/// Коллекция фикстур в памяти.
///
/// Чтение отдаёт фикстуры как есть. Изменения только имитируются: после проверки
/// и задержки возвращается подтверждение, а сами фикстуры не меняются.
pub struct MockStore<T: Record> {
    records: Vec<T>,
    in_flight: Mutex<HashSet<String>>,
    latency: Option<Duration>,
}

/// Держит id записи в наборе выполняемых изменений до конца операции
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<String>>,
    id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut set = self.set.lock().unwrap_or_else(|e| e.into_inner());
        set.remove(&self.id);
    }
}

impl<T: Record> MockStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            in_flight: Mutex::new(HashSet::new()),
            latency: None,
        }
    }

    /// Фиксированная задержка вместо значения из конфигурации
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn latency(&self) -> Duration {
        self.latency.unwrap_or_else(config::mock_latency)
    }

    fn begin(&self, id: &str) -> Result<InFlightGuard<'_>, ApiError> {
        let mut set = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !set.insert(id.to_string()) {
            return Err(ApiError::Busy(id.to_string()));
        }
        Ok(InFlightGuard {
            set: &self.in_flight,
            id: id.to_string(),
        })
    }

    fn ensure_exists(&self, id: &str) -> Result<(), ApiError> {
        match self.find(id) {
            Some(_) => Ok(()),
            None => Err(ApiError::NotFound(format!("{} {}", T::element_name(), id))),
        }
    }

    async fn complete(&self, id: &str, action: MutationAction) -> Result<MutationAck, ApiError> {
        let _guard = self.begin(id)?;
        tokio::time::sleep(self.latency()).await;

        tracing::info!(
            collection = T::collection_name(),
            id = id,
            action = action.as_str(),
            "mock change acknowledged"
        );

        Ok(MutationAck {
            id: id.to_string(),
            action,
        })
    }

    /// Новая запись. Если id пустой, он генерируется из префикса коллекции.
    pub async fn create(&self, record: T) -> Result<MutationAck, ApiError> {
        record.validate()?;

        let id = if record.id().trim().is_empty() {
            new_id(T::id_prefix())
        } else {
            record.id().to_string()
        };
        if self.find(&id).is_some() {
            return Err(ApiError::BadRequest(format!(
                "{} {} already exists",
                T::element_name(),
                id
            )));
        }

        self.complete(&id, MutationAction::Created).await
    }

    pub async fn update(&self, record: T) -> Result<MutationAck, ApiError> {
        record.validate()?;
        self.ensure_exists(record.id())?;
        self.complete(record.id(), MutationAction::Updated).await
    }

    pub async fn delete(&self, id: &str) -> Result<MutationAck, ApiError> {
        self.ensure_exists(id)?;
        self.complete(id, MutationAction::Deleted).await
    }
}

#[async_trait]
impl<T: Record> RecordRepository<T> for MockStore<T> {
    async fn all(&self) -> anyhow::Result<Vec<T>> {
        Ok(self.records.clone())
    }

    async fn get(&self, id: &str) -> anyhow::Result<Option<T>> {
        Ok(self.find(id).cloned())
    }
}

/// `PREFIX-XXXXXXXX`
fn new_id(prefix: &str) -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}-{}", prefix, &uuid[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_category::aggregate::{Category, CategoryStatus};
    use contracts::domain::common::utc_date;
    use contracts::shared::list_query::ListQuery;
    use std::sync::Arc;

    fn category(id: &str, slug: &str) -> Category {
        Category {
            id: id.to_string(),
            name: "Electronics".to_string(),
            slug: slug.to_string(),
            parent_id: None,
            description: String::new(),
            products_count: 3,
            status: CategoryStatus::Active,
            created_at: utc_date(2024, 5, 1),
        }
    }

    fn store(latency_ms: u64) -> MockStore<Category> {
        MockStore::new(vec![category("CAT-001", "electronics"), category("CAT-002", "books")])
            .with_latency(Duration::from_millis(latency_ms))
    }

    #[tokio::test]
    async fn test_create_generates_id_and_keeps_fixtures() {
        let store = store(0);
        let ack = store.create(category("", "garden")).await.unwrap();
        assert_eq!(ack.action, MutationAction::Created);
        assert!(ack.id.starts_with("CAT-"));
        assert_eq!(ack.id.len(), "CAT-".len() + 8);
        assert_eq!(store.records().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_record_is_rejected() {
        let store = store(0);
        let err = store.create(category("", "Not A Slug")).await.unwrap_err();
        match err {
            ApiError::Validation(fields) => assert!(fields.get("slug").is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let store = store(0);
        assert!(matches!(
            store.update(category("CAT-404", "missing")).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(store.delete("CAT-404").await, Err(ApiError::NotFound(_))));

        let ack = store.delete("CAT-001").await.unwrap();
        assert_eq!(ack.action, MutationAction::Deleted);
        assert!(store.find("CAT-001").is_some());
    }

    #[tokio::test]
    async fn test_create_with_existing_id_is_bad_request() {
        let store = store(0);
        assert!(matches!(
            store.create(category("CAT-001", "electronics")).await,
            Err(ApiError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_second_change_while_pending_is_busy() {
        let store = Arc::new(store(200));

        let first = {
            let store = store.clone();
            tokio::spawn(async move { store.delete("CAT-002").await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;

        let second = store.update(category("CAT-002", "books")).await;
        assert!(matches!(second, Err(ApiError::Busy(_))));

        let first = first.await.unwrap().unwrap();
        assert_eq!(first.action, MutationAction::Deleted);

        // guard released after completion
        assert!(store.delete("CAT-002").await.is_ok());
    }

    #[tokio::test]
    async fn test_repository_list_filters() {
        let store = store(0);
        let mut query = ListQuery::default();
        query.set_search("books");
        let page = store.list(&query).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "CAT-002");
        assert_eq!(store.get("CAT-001").await.unwrap().map(|c| c.id), Some("CAT-001".to_string()));
    }
}
