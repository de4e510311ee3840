//! Bar chart of deal amounts per referrer category.
//!
//! Stands in for a charting library: it only lays out the bars it is given.

use crate::shared::components::CardAnimated;
use crate::shared::icons::icon_sized;
use contracts::dashboards::d400_sales_report::DashboardView;
use contracts::shared::chart::{height_percent, max_value, ChartBar};
use leptos::prelude::*;

#[component]
pub fn ReferrerChart(view_model: Memo<DashboardView>) -> impl IntoView {
    view! {
        <CardAnimated class="chart-card" delay_ms=160>
            <div class="card-toolbar">
                <span class="card-toolbar__title">
                    "Referrers " {icon_sized("chevron-down", 14)}
                </span>
                <span class="card-toolbar__filters">"Filters " {icon_sized("menu", 12)}</span>
            </div>

            {move || view_model.with(|v| view! { <BarChart bars=v.chart.clone() /> })}

            <div class="chart-card__footer">
                <div>
                    <span class="chart-card__caption">"Deals amount"</span>
                    <span class="chart-card__subtitle">
                        "by referrer category " {icon_sized("chevron-down", 14)}
                    </span>
                </div>
                {icon_sized("shopping-bag", 20)}
            </div>
        </CardAnimated>
    }
}

#[component]
pub fn BarChart(bars: Vec<ChartBar>) -> impl IntoView {
    let max = max_value(&bars);

    view! {
        <div class="bar-chart">
            {bars.into_iter().map(|bar| {
                let height = format!("{:.1}%", height_percent(&bar, max));
                let fill = if bar.striped {
                    format!(
                        "repeating-linear-gradient(45deg, {c}, {c} 4px, transparent 4px, transparent 8px)",
                        c = bar.color
                    )
                } else {
                    bar.color.clone()
                };
                let outline = if bar.striped { bar.color.clone() } else { "none".to_string() };

                view! {
                    <div class="bar-chart__column" title=format!("{}: {}", bar.label, bar.value)>
                        <div
                            class="bar-chart__bar"
                            style:height=height
                            style:background=fill
                            style:border-color=outline
                        ></div>
                        <span class="bar-chart__label">{bar.label.clone()}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
