use anyhow::Result;
use chrono::NaiveDate;
use contracts::dashboards::d400_overview::dto::OverviewDto;
use contracts::domain::a002_order::aggregate::OrderStatus;
use contracts::shared::badge::BadgeValue;
use contracts::shared::indicators::{
    chart_bars, percent_change, share_percent, IndicatorId, IndicatorStatus, StatCardValue,
    ValueFormat,
};

use crate::domain::{a001_user, a002_order, a003_product, a006_complaint, a007_package};

/// Значения предыдущего периода, с ними сравниваются карточки
struct Baseline {
    users: f64,
    orders: f64,
    revenue: f64,
    open_complaints: f64,
}

const PREVIOUS_PERIOD: Baseline = Baseline {
    users: 10.0,
    orders: 12.0,
    revenue: 2_950.0,
    open_complaints: 5.0,
};

fn stat(
    id: &str,
    label: &str,
    icon: &str,
    value: f64,
    format: ValueFormat,
    previous: Option<f64>,
    higher_is_better: bool,
) -> StatCardValue {
    let change_percent = previous.and_then(|p| percent_change(value, p));
    StatCardValue {
        id: IndicatorId::new(id),
        label: label.to_string(),
        icon: icon.to_string(),
        value,
        format,
        change_percent,
        status: IndicatorStatus::from_change(change_percent, higher_is_better),
    }
}

fn usd() -> ValueFormat {
    ValueFormat::Money {
        currency: "USD".to_string(),
    }
}

/// "2024-03" → "Mar 2024"
fn month_label((year, month): (i32, u32)) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{:04}-{:02}", year, month))
}

pub async fn get_overview() -> Result<OverviewDto> {
    let users = a001_user::repository::store().records().len() as f64;
    let orders = a002_order::repository::store().records().len() as f64;
    let revenue = a002_order::service::completed_revenue();
    let open_complaints = a006_complaint::service::open_count() as f64;
    let low_stock = a003_product::service::low_stock().len() as f64;
    let mrr = a007_package::service::monthly_recurring_revenue();

    let mut low_stock_card = stat(
        "low_stock",
        "Low stock products",
        "package",
        low_stock,
        ValueFormat::Integer,
        None,
        false,
    );
    if low_stock > 0.0 {
        low_stock_card.status = IndicatorStatus::Warning;
    }

    let stats = vec![
        stat("users", "Total users", "users", users, ValueFormat::Integer, Some(PREVIOUS_PERIOD.users), true),
        stat("orders", "Total orders", "shopping-cart", orders, ValueFormat::Integer, Some(PREVIOUS_PERIOD.orders), true),
        stat("revenue", "Revenue", "dollar-sign", revenue, usd(), Some(PREVIOUS_PERIOD.revenue), true),
        stat(
            "open_complaints",
            "Open complaints",
            "alert-circle",
            open_complaints,
            ValueFormat::Integer,
            Some(PREVIOUS_PERIOD.open_complaints),
            false,
        ),
        low_stock_card,
        stat("mrr", "Subscription MRR", "repeat", mrr, usd(), None, true),
    ];

    let status_points: Vec<(String, f64)> = OrderStatus::all()
        .iter()
        .map(|s| {
            (
                s.label().to_string(),
                a002_order::service::count_by_status(*s) as f64,
            )
        })
        .collect();

    let month_points: Vec<(String, f64)> = a002_order::service::revenue_by_month()
        .into_iter()
        .map(|(month, value)| (month_label(month), (value * 100.0).round() / 100.0))
        .collect();

    let completed = a002_order::service::count_by_status(OrderStatus::Completed) as f64;

    tracing::info!(
        "D400 Overview: {} stat cards, {} months of revenue",
        stats.len(),
        month_points.len()
    );

    Ok(OverviewDto {
        stats,
        orders_by_status: chart_bars(&status_points),
        revenue_by_month: chart_bars(&month_points),
        completion_rate: share_percent(completed, orders),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_overview_bars_and_cards() {
        let overview = get_overview().await.unwrap();

        assert_eq!(overview.orders_by_status.len(), OrderStatus::all().len());
        let tallest = overview
            .orders_by_status
            .iter()
            .map(|b| b.height_percent)
            .fold(0.0, f64::max);
        assert_eq!(tallest, 100.0);

        let orders_total: f64 = overview.orders_by_status.iter().map(|b| b.value).sum();
        assert_eq!(orders_total, 15.0);

        let revenue = overview.stats.iter().find(|s| s.id.0 == "revenue").unwrap();
        let months: f64 = overview.revenue_by_month.iter().map(|b| b.value).sum();
        assert!((revenue.value - months).abs() < 0.05);

        let complaints = overview.stats.iter().find(|s| s.id.0 == "open_complaints").unwrap();
        // 4 открытых против 5 в прошлом периоде
        assert_eq!(complaints.status, IndicatorStatus::Good);
        assert!(overview.completion_rate > 0.0 && overview.completion_rate <= 100.0);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label((2024, 3)), "Mar 2024");
        assert_eq!(month_label((2024, 13)), "2024-13");
    }
}
