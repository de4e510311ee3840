use crate::shared::components::table::format_grouped;
use crate::shared::components::ui::Badge;
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon_sized;
use contracts::dashboards::d400_sales_report::{DashboardView, SalesRow};
use leptos::prelude::*;

/// Sales leaderboard, filtered by seller name
#[component]
pub fn SalesTable(view_model: Memo<DashboardView>) -> impl IntoView {
    let has_rows = move || view_model.with(|v| !v.sales.is_empty());

    view! {
        <CardAnimated class="sales-table" delay_ms=240>
            <div class="sales-table__head">
                <span>"Sales"</span>
                <div class="sales-table__columns">
                    <span class="sales-table__revenue">"Revenue"</span>
                    <span class="sales-table__narrow">"Leads"</span>
                    <span class="sales-table__narrow">"KPI"</span>
                    <span class="sales-table__narrow">"W/L"</span>
                </div>
            </div>

            <Show
                when=has_rows
                fallback=|| view! {
                    <div class="empty-state">
                        {icon_sized("search", 16)}
                        <span>"No sales found"</span>
                    </div>
                }
            >
                <For
                    each=move || view_model.with(|v| v.sales.clone())
                    key=|row| (row.record.user.id.clone(), row.revenue.to_bits())
                    children=move |row: SalesRow| view! { <SalesItem row=row /> }
                />
            </Show>

            <div class="sales-table__badges">
                <Badge icon="💪" text="Top sales" />
                <Badge icon="🔥" text="Sales streak" />
            </div>
        </CardAnimated>
    }
}

#[component]
fn SalesItem(row: SalesRow) -> impl IntoView {
    let record = row.record;
    let trend_down = !record.trend.is_up();
    let trend_icon = if trend_down { "chevron-down" } else { "trending-up" };

    view! {
        <div class="sales-row">
            <div class="sales-row__who">
                <img class="avatar avatar--small" src=record.user.avatar.clone() alt="" />
                <span class="sales-row__name">{record.user.name.clone()}</span>
            </div>
            <div class="sales-table__columns">
                <span class="sales-table__revenue">{format!("${}", format_grouped(row.revenue, 3))}</span>
                <span class="sales-table__narrow sales-row__leads">{record.leads}</span>
                <span class="sales-table__narrow">{record.kpi}</span>
                <span class="sales-table__narrow">{format!("{}%", record.win_rate)}</span>
                <span class="sales-row__trend" class:sales-row__trend--down=trend_down>
                    {icon_sized(trend_icon, 14)}
                </span>
            </div>
        </div>
    }
}
