use contracts::shared::indicators::ChartBar;
use leptos::prelude::*;

/// Декоративная столбчатая диаграмма: высота столбца уже посчитана на backend
#[component]
pub fn BarChart(
    #[prop(into)]
    title: String,
    bars: Vec<ChartBar>,
    /// Formats the value shown above a bar
    format_value: fn(f64) -> String,
) -> impl IntoView {
    let is_empty = bars.is_empty();

    view! {
        <div class="bar-chart">
            <div class="bar-chart__title">{title}</div>
            {if is_empty {
                view! { <div class="bar-chart__empty">"No data"</div> }.into_any()
            } else {
                view! {
                    <div class="bar-chart__bars">
                        {bars.into_iter().map(|bar| {
                            let height = format!("{:.1}%", bar.height_percent.clamp(0.0, 100.0));
                            view! {
                                <div class="bar-chart__column" title=format!("{}: {}", bar.label, format_value(bar.value))>
                                    <div class="bar-chart__value">{format_value(bar.value)}</div>
                                    <div class="bar-chart__track">
                                        <div class="bar-chart__bar" style:height=height></div>
                                    </div>
                                    <div class="bar-chart__label">{bar.label.clone()}</div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
