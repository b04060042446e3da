use axum::{routing::get, Router};
use contracts::domain::a001_user::aggregate::User;
use contracts::domain::a002_order::aggregate::Order;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_category::aggregate::Category;
use contracts::domain::a005_payment::aggregate::Payment;
use contracts::domain::a006_complaint::aggregate::Complaint;
use contracts::domain::a007_package::aggregate::Package;
use contracts::domain::a008_policy::aggregate::Policy;
use contracts::domain::a009_ai_model::aggregate::AiModel;
use contracts::domain::a010_site_content::aggregate::SiteContent;

use crate::handlers::{self, records};
use crate::shared::data::collection::Collection;

/// Четыре маршрута одной коллекции: список, полный список, запись, удаление
fn collection_routes<T: Collection>() -> Router {
    let base = format!("/api/{}", T::collection_name());
    Router::new()
        .route(&base, get(records::list::<T>).post(records::upsert::<T>))
        .route(&format!("{}/all", base), get(records::list_all::<T>))
        .route(
            &format!("{}/:id", base),
            get(records::get_by_id::<T>).delete(records::delete::<T>),
        )
}

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        .route(
            "/api/dashboard/overview",
            get(handlers::d400_overview::get_overview),
        )
        // ========================================
        // COLLECTIONS
        // ========================================
        .merge(collection_routes::<User>())
        .merge(collection_routes::<Order>())
        .merge(collection_routes::<Product>())
        .merge(collection_routes::<Category>())
        .merge(collection_routes::<Payment>())
        .merge(collection_routes::<Complaint>())
        .merge(collection_routes::<Package>())
        .merge(collection_routes::<Policy>())
        .merge(collection_routes::<AiModel>())
        .merge(collection_routes::<SiteContent>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use contracts::shared::detail::RecordDetail;
    use contracts::shared::list_query::Page;
    use contracts::shared::mutation::{ApiErrorBody, MutationAck, MutationAction};
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    async fn call(method: Method, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = configure_routes()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_list_with_status_filter() {
        let (status, body) = call(Method::GET, "/api/orders?status=cancelled", None).await;
        assert_eq!(status, StatusCode::OK);
        let page: Page<Order> = parse(&body);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "ORD-1005");
    }

    #[tokio::test]
    async fn test_list_pagination_and_search() {
        let (_, body) = call(Method::GET, "/api/users?page=2&page_size=5", None).await;
        let page: Page<User> = parse(&body);
        assert_eq!((page.page, page.total_pages, page.items.len()), (2, 3, 5));
        assert_eq!(page.items[0].id, "USR-006");

        let (_, body) = call(Method::GET, "/api/users?search=nobody-here", None).await;
        let page: Page<User> = parse(&body);
        assert!(page.items.is_empty());
        assert_eq!((page.page, page.total_pages), (1, 1));
    }

    #[tokio::test]
    async fn test_all_returns_full_collection() {
        let (status, body) = call(Method::GET, "/api/categories/all", None).await;
        assert_eq!(status, StatusCode::OK);
        let all: Vec<Category> = parse(&body);
        assert_eq!(all.len(), 8);
    }

    #[tokio::test]
    async fn test_detail_and_not_found() {
        let (status, body) = call(Method::GET, "/api/categories/CAT-003", None).await;
        assert_eq!(status, StatusCode::OK);
        let detail: RecordDetail<Category> = parse(&body);
        assert_eq!(detail.record.name, "Computers");
        assert_eq!(detail.related_for("products").len(), 3);

        let (status, body) = call(Method::GET, "/api/categories/CAT-999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ApiErrorBody = parse(&body);
        assert!(error.error.contains("CAT-999"));
    }

    #[tokio::test]
    async fn test_escaped_id_is_matched_literally() {
        let (status, _) = call(Method::GET, "/api/orders/ORD-1001%3Fx", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = call(Method::DELETE, "/api/orders/ORD-1001%23y", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = call(Method::GET, "/api/orders/ORD-1001", None).await;
        assert_eq!(status, StatusCode::OK);
        let detail: RecordDetail<Order> = parse(&body);
        assert_eq!(detail.record.id, "ORD-1001");
    }

    #[tokio::test]
    async fn test_invalid_payload_returns_field_errors() {
        let mut policy = serde_json::to_value(
            crate::domain::a008_policy::repository::store().records()[0].clone(),
        )
        .unwrap();
        policy["slug"] = "Not A Slug".into();
        policy["version"] = "v2".into();

        let (status, body) = call(Method::POST, "/api/policies", Some(policy)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ApiErrorBody = parse(&body);
        assert!(error.fields.contains_key("slug"));
        assert!(error.fields.contains_key("version"));
    }

    #[tokio::test]
    async fn test_update_acknowledged_without_changes() {
        let mut model = crate::domain::a009_ai_model::repository::store().records()[0].clone();
        model.temperature = 1.2;

        let (status, body) = call(
            Method::POST,
            "/api/ai_models",
            Some(serde_json::to_value(&model).unwrap()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let ack: MutationAck = parse(&body);
        assert_eq!(ack.action, MutationAction::Updated);
        assert_eq!(ack.id, model.id);

        let (_, body) = call(Method::GET, &format!("/api/ai_models/{}", model.id), None).await;
        let detail: RecordDetail<AiModel> = parse(&body);
        assert_eq!(detail.record.temperature, 0.7);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let (status, _) = call(Method::DELETE, "/api/site_content/CNT-404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dashboard_overview() {
        let (status, body) = call(Method::GET, "/api/dashboard/overview", None).await;
        assert_eq!(status, StatusCode::OK);
        let overview: contracts::dashboards::d400_overview::dto::OverviewDto = parse(&body);
        assert!(!overview.stats.is_empty());
    }
}
