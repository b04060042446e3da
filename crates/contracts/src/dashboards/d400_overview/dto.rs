use serde::{Deserialize, Serialize};

use crate::shared::indicators::{ChartBar, StatCardValue};

/// Обзорный дашборд: карточки показателей и две столбчатые диаграммы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewDto {
    pub stats: Vec<StatCardValue>,
    pub orders_by_status: Vec<ChartBar>,
    pub revenue_by_month: Vec<ChartBar>,
    /// Доля завершённых заказов, %
    pub completion_rate: f64,
}
