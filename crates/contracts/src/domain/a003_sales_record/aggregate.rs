use serde::{Deserialize, Serialize};

use crate::domain::a001_user::User;
use crate::enums::Trend;
use crate::shared::list_utils::Searchable;

/// One row of the sales leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub user: User,
    /// Revenue for the current period
    pub revenue: f64,
    pub leads: u32,
    pub kpi: u32,
    pub win_loss: f64,
    /// Win rate, percent
    pub win_rate: u32,
    pub trend: Trend,
}

impl Searchable for SalesRecord {
    fn search_text(&self) -> &str {
        &self.user.name
    }
}

/// Sales record as stored in the dataset file, referencing its user by id
#[derive(Debug, Clone, Deserialize)]
pub struct SalesRecordEntry {
    pub user_id: String,
    pub revenue: f64,
    pub leads: u32,
    pub kpi: u32,
    pub win_loss: f64,
    pub win_rate: u32,
    pub trend: Trend,
}

impl SalesRecordEntry {
    pub fn into_record(self, user: User) -> SalesRecord {
        SalesRecord {
            user,
            revenue: self.revenue,
            leads: self.leads,
            kpi: self.kpi,
            win_loss: self.win_loss,
            win_rate: self.win_rate,
            trend: self.trend,
        }
    }
}
