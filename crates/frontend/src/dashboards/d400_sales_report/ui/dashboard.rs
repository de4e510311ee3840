use super::chart::ReferrerChart;
use super::header::{ReportHeader, TopBar};
use super::referrers::ReferrerList;
use super::revenue_card::RevenueCard;
use super::sales_table::SalesTable;
use super::side_cards::{HighlightCards, PlatformsCard, StatRow};
use crate::layout::global_context::use_global_context;
use contracts::dashboards::d400_sales_report::{derive_view, DashboardView};
use leptos::prelude::*;

/// Sales report page
#[component]
pub fn SalesReportDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let state = ctx.dashboard;
    let dataset = ctx.dataset;
    let config = ctx.config;

    // Recomputed synchronously whenever query, sort or timeframe change
    let view_model: Memo<DashboardView> =
        Memo::new(move |_| state.with(|s| derive_view(dataset, config, s)));

    Effect::new(move |_| {
        view_model.with(|v| {
            log::debug!(
                "Dashboard view: {} referrers, {} sales rows, period {}",
                v.referrers.len(),
                v.sales.len(),
                v.period_label
            );
        });
    });

    view! {
        <div id="d400_sales_report--dashboard" class="d400-dashboard">
            <TopBar />
            <ReportHeader view_model=view_model />

            <div class="d400-dashboard__grid">
                <div class="d400-dashboard__main">
                    <RevenueCard view_model=view_model />
                    <div class="d400-dashboard__middle">
                        <ReferrerList view_model=view_model />
                        <ReferrerChart view_model=view_model />
                        <SalesTable view_model=view_model />
                    </div>
                </div>

                <div class="d400-dashboard__side">
                    <HighlightCards />
                    <StatRow />
                    <PlatformsCard />
                </div>
            </div>
        </div>
    }
}
