use crate::shared::api_utils::get_json;
use contracts::dashboards::d400_overview::dto::OverviewDto;

/// Получить показатели обзорного дашборда
pub async fn get_overview() -> Result<OverviewDto, String> {
    get_json("/api/dashboard/overview").await
}
