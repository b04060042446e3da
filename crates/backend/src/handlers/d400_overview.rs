use axum::Json;
use contracts::dashboards::d400_overview::dto::OverviewDto;

use crate::dashboards::d400_overview::service;
use crate::shared::error::ApiError;

/// GET /api/dashboard/overview
pub async fn get_overview() -> Result<Json<OverviewDto>, ApiError> {
    Ok(Json(service::get_overview().await?))
}
