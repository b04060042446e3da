use crate::dashboards::d400_overview::api;
use crate::shared::components::bar_chart::BarChart;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_int, format_number_with_decimals};
use contracts::dashboards::d400_overview::dto::OverviewDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn format_usd(value: f64) -> String {
    format_money(value, "USD")
}

/// Overview dashboard: stat cards, orders by status, revenue by month
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<OverviewDto>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_overview().await {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => {
                    log::error!("Failed to load overview: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    load();

    view! {
        <div class="page page--dashboard" id="d400_overview">
            <PageHeader title="Overview".to_string() subtitle="Store activity at a glance".to_string()>
                <button class="button button--secondary" on:click=move |_| load() disabled=move || loading.get()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || match data.get() {
                None if loading.get() => view! { <div class="placeholder">"Loading…"</div> }.into_any(),
                None => view! { <div class="placeholder">"No data"</div> }.into_any(),
                Some(overview) => view! {
                    <div class="dashboard__stats">
                        {overview.stats.into_iter().map(|card| view! { <StatCard card=card /> }).collect_view()}
                    </div>
                    <div class="dashboard__charts">
                        <BarChart
                            title="Orders by status".to_string()
                            bars=overview.orders_by_status
                            format_value=format_number_int
                        />
                        <BarChart
                            title="Revenue by month".to_string()
                            bars=overview.revenue_by_month
                            format_value=format_usd
                        />
                    </div>
                    <div class="dashboard__footnote">
                        {format!(
                            "Completion rate: {}%",
                            format_number_with_decimals(overview.completion_rate, 1)
                        )}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
