use contracts::dashboards::d400_sales_report::DashboardState;
use contracts::shared::config::DashboardConfig;
use contracts::shared::dataset::Dataset;
use contracts::shared::navigation::SidebarState;
use leptos::prelude::*;

/// Application-wide state, provided once by `App`.
///
/// Dataset and config are loaded before mounting and never change;
/// the two state objects are replaced field by field on user input.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub dataset: &'static Dataset,
    pub config: &'static DashboardConfig,
    pub dashboard: RwSignal<DashboardState>,
    pub sidebar: RwSignal<SidebarState>,
}

impl AppGlobalContext {
    pub fn new(dataset: &'static Dataset, config: &'static DashboardConfig) -> Self {
        Self {
            dataset,
            config,
            dashboard: RwSignal::new(DashboardState::default()),
            sidebar: RwSignal::new(SidebarState::default()),
        }
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
