use crate::shared::api_utils::{delete_json, get_json, get_json_optional, post_json};
use contracts::domain::common::Record;
use contracts::shared::detail::RecordDetail;
use contracts::shared::mutation::MutationAck;

/// Путь записи коллекции; id экранируется целиком, `/`, `?` и `#` не меняют маршрут
pub fn record_path(collection: &str, id: &str) -> String {
    format!("/api/{}/{}", collection, urlencoding::encode(id))
}

/// Вся коллекция, фильтрация и пагинация выполняются на клиенте
pub async fn fetch_all<T: Record>() -> Result<Vec<T>, String> {
    get_json(&format!("/api/{}/all", T::collection_name())).await
}

/// Запись со связанными списками; `Ok(None)` если записи нет
pub async fn fetch_detail<T: Record>(id: &str) -> Result<Option<RecordDetail<T>>, String> {
    get_json_optional(&record_path(T::collection_name(), id)).await
}

/// Create (пустой id) или update
pub async fn save<T: Record>(record: &T) -> Result<MutationAck, String> {
    post_json(&format!("/api/{}", T::collection_name()), record).await
}

pub async fn delete<T: Record>(id: &str) -> Result<MutationAck, String> {
    delete_json(&record_path(T::collection_name(), id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_path_escapes_id() {
        assert_eq!(record_path("orders", "ORD-1001"), "/api/orders/ORD-1001");
        assert_eq!(record_path("orders", "a/b?c#d"), "/api/orders/a%2Fb%3Fc%23d");
        assert_eq!(record_path("orders", "ORD-1001?x"), "/api/orders/ORD-1001%3Fx");
    }
}
