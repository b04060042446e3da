use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key in the overview payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

impl IndicatorStatus {
    /// Status from a period-over-period change.
    ///
    /// `higher_is_better = false` for metrics like open complaints.
    pub fn from_change(change_percent: Option<f64>, higher_is_better: bool) -> Self {
        match change_percent {
            None => IndicatorStatus::Neutral,
            Some(c) if c.abs() < f64::EPSILON => IndicatorStatus::Neutral,
            Some(c) if (c > 0.0) == higher_is_better => IndicatorStatus::Good,
            Some(_) => IndicatorStatus::Bad,
        }
    }
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single stat card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCardValue {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    pub value: f64,
    pub format: ValueFormat,
    /// Change relative to previous period, expressed as a percentage.
    pub change_percent: Option<f64>,
    pub status: IndicatorStatus,
}

/// One bar of a decorative bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    /// Height relative to the tallest bar, 0..=100
    pub height_percent: f64,
}

/// Build bars from `(label, value)` pairs, heights scaled to 100.
pub fn chart_bars(points: &[(String, f64)]) -> Vec<ChartBar> {
    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let heights = bar_heights(&values, 100.0);
    points
        .iter()
        .zip(heights)
        .map(|((label, value), height)| ChartBar {
            label: label.clone(),
            value: *value,
            height_percent: height,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Derived metrics
// ---------------------------------------------------------------------------

/// `value / max(values) * max_height` for every value.
///
/// All bars are 0 when the maximum is not positive (empty input, all zeros).
/// Negative values are drawn as 0.
pub fn bar_heights(values: &[f64], max_height: f64) -> Vec<f64> {
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| {
            if v.is_finite() && *v > 0.0 {
                v / max * max_height
            } else {
                0.0
            }
        })
        .collect()
}

/// `(current - previous) / previous * 100`, `None` when there is no baseline.
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return None;
    }
    Some((current - previous) / previous.abs() * 100.0)
}

/// Share of `part` in `total` as a percentage, 0 when `total` is 0.
pub fn share_percent(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_heights_scale_to_max() {
        let heights = bar_heights(&[10.0, 20.0, 5.0], 100.0);
        assert_eq!(heights, vec![50.0, 100.0, 25.0]);
    }

    #[test]
    fn test_bar_heights_all_zero() {
        assert_eq!(bar_heights(&[0.0, 0.0, 0.0], 200.0), vec![0.0, 0.0, 0.0]);
        assert!(bar_heights(&[], 200.0).is_empty());
        assert_eq!(bar_heights(&[-3.0, 6.0], 60.0), vec![0.0, 60.0]);
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(120.0, 100.0), Some(20.0));
        assert_eq!(percent_change(50.0, 100.0), Some(-50.0));
        assert_eq!(percent_change(50.0, 0.0), None);
    }

    #[test]
    fn test_share_percent() {
        assert_eq!(share_percent(1.0, 4.0), 25.0);
        assert_eq!(share_percent(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_status_from_change() {
        assert_eq!(IndicatorStatus::from_change(Some(5.0), true), IndicatorStatus::Good);
        assert_eq!(IndicatorStatus::from_change(Some(5.0), false), IndicatorStatus::Bad);
        assert_eq!(IndicatorStatus::from_change(Some(-5.0), false), IndicatorStatus::Good);
        assert_eq!(IndicatorStatus::from_change(None, true), IndicatorStatus::Neutral);
        assert_eq!(IndicatorStatus::from_change(Some(0.0), true), IndicatorStatus::Neutral);
    }

    #[test]
    fn test_chart_bars() {
        let bars = chart_bars(&[("Jan".to_string(), 0.0), ("Feb".to_string(), 40.0)]);
        assert_eq!(bars[0].height_percent, 0.0);
        assert_eq!(bars[1].height_percent, 100.0);
        assert_eq!(bars[1].label, "Feb");
    }
}
