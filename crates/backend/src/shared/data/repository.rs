use async_trait::async_trait;
use contracts::domain::common::Record;
use contracts::shared::list_query::{list_page, ListQuery, Page};

/// Источник записей одной коллекции.
///
/// Списки, фильтрация и детальный просмотр работают только через этот трейт,
/// поэтому фикстуры можно заменить на настоящее хранилище без правки обработчиков.
#[async_trait]
pub trait RecordRepository<T: Record>: Send + Sync {
    /// Все записи в исходном порядке
    async fn all(&self) -> anyhow::Result<Vec<T>>;

    async fn get(&self, id: &str) -> anyhow::Result<Option<T>>;

    /// Отфильтрованная страница
    async fn list(&self, query: &ListQuery) -> anyhow::Result<Page<T>> {
        let items = self.all().await?;
        Ok(list_page(&items, query))
    }
}
