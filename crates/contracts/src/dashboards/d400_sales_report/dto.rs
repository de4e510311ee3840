use serde::{Deserialize, Serialize};

use crate::domain::a003_sales_record::SalesRecord;
use crate::shared::chart::ChartBar;
use crate::shared::config::HeadlineFigures;

/// Referrer as displayed for the selected timeframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferrerRow {
    pub name: String,
    /// Amount from the dataset, the sort key
    pub base_amount: f64,
    /// Amount scaled by the timeframe multiplier, whole currency units
    pub amount: f64,
    pub percentage: u8,
    pub icon: String,
    pub color: String,
}

impl ReferrerRow {
    /// Letter shown inside the colored avatar circle
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Sales leaderboard row for the selected timeframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRow {
    pub record: SalesRecord,
    /// Scaled revenue; left unrounded, formatting is up to the renderer
    pub revenue: f64,
}

/// Everything the dashboard page renders, derived from the dataset and the current state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub headline: HeadlineFigures,
    /// "Sep 1 - Nov 30, 2023"
    pub period_label: String,
    pub comparison_label: String,
    pub referrers: Vec<ReferrerRow>,
    pub sales: Vec<SalesRow>,
    /// Highlighted seller on the revenue card, independent of the search query
    pub featured: Option<SalesRow>,
    pub chart: Vec<ChartBar>,
}
