use axum::extract::{Path, Query};
use axum::Json;
use contracts::shared::detail::RecordDetail;
use contracts::shared::list_query::{ListQuery, Page, DEFAULT_PAGE_SIZE, STATUS_ALL};
use contracts::shared::mutation::MutationAck;
use serde::Deserialize;

use crate::shared::data::collection::{self, Collection};
use crate::shared::error::ApiError;

/// Верхняя граница размера страницы для REST
pub const MAX_PAGE_SIZE: usize = 100;

/// Query string списка: `?search=&status=&page=&page_size=`
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
    #[serde(alias = "pageSize")]
    pub page_size: Option<usize>,
}

impl ListParams {
    pub fn into_query(self) -> ListQuery {
        let page_size = match self.page_size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };
        ListQuery {
            search: self.search.unwrap_or_default(),
            status: self
                .status
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| STATUS_ALL.to_string()),
            page: self.page.unwrap_or(1).max(1),
            page_size,
        }
    }
}

/// GET /api/<collection>
pub async fn list<T: Collection>(
    Query(params): Query<ListParams>,
) -> Result<Json<Page<T>>, ApiError> {
    let query = params.into_query();
    let page = collection::list::<T>(&query).await?;
    Ok(Json(page))
}

/// GET /api/<collection>/all
pub async fn list_all<T: Collection>() -> Result<Json<Vec<T>>, ApiError> {
    Ok(Json(collection::list_all::<T>().await?))
}

/// GET /api/<collection>/:id
pub async fn get_by_id<T: Collection>(
    Path(id): Path<String>,
) -> Result<Json<RecordDetail<T>>, ApiError> {
    match collection::get_detail::<T>(&id).await? {
        Some(detail) => Ok(Json(detail)),
        None => Err(ApiError::NotFound(format!("{} {}", T::element_name(), id))),
    }
}

/// POST /api/<collection>
pub async fn upsert<T: Collection>(Json(record): Json<T>) -> Result<Json<MutationAck>, ApiError> {
    Ok(Json(collection::upsert(record).await?))
}

/// DELETE /api/<collection>/:id
pub async fn delete<T: Collection>(Path(id): Path<String>) -> Result<Json<MutationAck>, ApiError> {
    Ok(Json(collection::delete::<T>(&id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let query = ListParams::default().into_query();
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn test_params_are_normalized() {
        let query = ListParams {
            search: Some("alice".to_string()),
            status: Some("  ".to_string()),
            page: Some(0),
            page_size: Some(5_000),
        }
        .into_query();
        assert_eq!(query.status, STATUS_ALL);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, MAX_PAGE_SIZE);

        let zero = ListParams {
            page_size: Some(0),
            ..Default::default()
        }
        .into_query();
        assert_eq!(zero.page_size, DEFAULT_PAGE_SIZE);
    }
}
