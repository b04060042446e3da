use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_int, format_number_with_decimals};
use contracts::shared::indicators::{IndicatorStatus, StatCardValue, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => format_money(val, currency),
        ValueFormat::Number { decimals } => format_number_with_decimals(val, *decimals as usize),
        ValueFormat::Percent { decimals } => {
            format!("{}%", format_number_with_decimals(val, *decimals as usize))
        }
        ValueFormat::Integer => format_number_int(val),
    }
}

/// Стрелка и класс для изменения относительно прошлого периода
fn change_badge(pct: f64) -> (String, &'static str) {
    let (arrow, cls) = if pct > 0.5 {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if pct < -0.5 {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    };
    (format!("{}{:.1}%", arrow, pct.abs()), cls)
}

#[component]
pub fn StatCard(card: StatCardValue) -> impl IntoView {
    let status_class = match card.status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = format_value(card.value, &card.format);
    let change_view = card.change_percent.map(|pct| {
        let (text, cls) = change_badge(pct);
        view! { <span class=cls>{text}</span> }
    });

    view! {
        <div class=status_class data-indicator=card.id.0>
            <div class="stat-card__icon">
                {icon(&card.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{card.label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        let usd = ValueFormat::Money { currency: "USD".to_string() };
        assert_eq!(format_value(3120.5, &usd), "$3,120.50");
        assert_eq!(format_value(15.0, &ValueFormat::Integer), "15");
        assert_eq!(format_value(53.333, &ValueFormat::Percent { decimals: 1 }), "53.3%");
    }

    #[test]
    fn test_change_badge() {
        assert_eq!(change_badge(25.0).0, "\u{2191}25.0%");
        assert_eq!(change_badge(-20.0).1, "stat-card__change stat-card__change--down");
        assert_eq!(change_badge(0.2).0, "0.2%");
    }
}
