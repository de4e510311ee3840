use crate::dashboards::d400_sales_report::SalesReportDashboard;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::{Navbar, Sidebar};
use crate::layout::Shell;
use contracts::shared::config::load_config;
use contracts::shared::dataset::load_dataset;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let loaded = load_config().and_then(|config| load_dataset().map(|dataset| (dataset, config)));

    match loaded {
        Ok((dataset, config)) => {
            log::info!(
                "Dashboard data loaded: {} referrers, {} sellers",
                dataset.referrers.len(),
                dataset.sales_team.len()
            );
            // Provide the AppGlobalContext store to the whole app via context.
            provide_context(AppGlobalContext::new(dataset, config));

            view! {
                <Shell
                    left=|| view! { <Navbar /> <Sidebar /> }.into_any()
                    center=|| view! { <SalesReportDashboard /> }.into_any()
                />
            }
            .into_any()
        }
        Err(err) => {
            log::error!("Failed to load dashboard data: {:#}", err);
            view! {
                <div class="app-error">
                    <strong>"⚠ Dashboard data could not be loaded: "</strong>
                    {err.to_string()}
                </div>
            }
            .into_any()
        }
    }
}
