//! Static mock dataset bundled with the application.
//!
//! Loaded once at startup and shared read-only for the whole session.

use std::collections::HashMap;

use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::domain::a001_user::User;
use crate::domain::a002_referrer::Referrer;
use crate::domain::a003_sales_record::{SalesRecord, SalesRecordEntry};
use crate::shared::chart::ChartBar;

const EMBEDDED_DATASET: &str = include_str!("../../data/dataset.json");

static DATASET: OnceCell<Dataset> = OnceCell::new();

/// Revenue share of a partner platform ("Work with platforms" card)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    /// Percent of revenue
    pub share: f64,
    pub amount: f64,
    pub color: String,
}

/// Raw file layout; sales records still reference users by id
#[derive(Debug, Deserialize)]
struct DatasetFile {
    users: Vec<User>,
    referrers: Vec<Referrer>,
    sales_team: Vec<SalesRecordEntry>,
    #[serde(default)]
    platforms: Vec<Platform>,
    #[serde(default)]
    charts: HashMap<String, Vec<ChartBar>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub users: Vec<User>,
    pub referrers: Vec<Referrer>,
    pub sales_team: Vec<SalesRecord>,
    pub platforms: Vec<Platform>,
    pub charts: HashMap<String, Vec<ChartBar>>,
}

impl Dataset {
    pub fn from_json(contents: &str) -> anyhow::Result<Self> {
        let file: DatasetFile =
            serde_json::from_str(contents).context("failed to parse dashboard dataset")?;

        let sales_team = file
            .sales_team
            .into_iter()
            .map(|entry| {
                let user = file
                    .users
                    .iter()
                    .find(|u| u.id == entry.user_id)
                    .cloned()
                    .with_context(|| format!("sales record references unknown user '{}'", entry.user_id))?;
                Ok(entry.into_record(user))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let share: u32 = file.referrers.iter().map(|r| u32::from(r.percentage)).sum();
        if share > 100 {
            log::warn!("Referrer percentages add up to {}%", share);
        }

        Ok(Self {
            users: file.users,
            referrers: file.referrers,
            sales_team,
            platforms: file.platforms,
            charts: file.charts,
        })
    }

    /// Chart dataset by key; unknown keys render an empty chart
    pub fn chart(&self, key: &str) -> &[ChartBar] {
        match self.charts.get(key) {
            Some(bars) => bars.as_slice(),
            None => {
                log::warn!("Chart dataset '{}' not found", key);
                &[]
            }
        }
    }
}

/// Bundled dataset, parsed on first use
pub fn load_dataset() -> anyhow::Result<&'static Dataset> {
    DATASET.get_or_try_init(|| Dataset::from_json(EMBEDDED_DATASET))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Trend;

    #[test]
    fn test_embedded_dataset_loads() {
        let dataset = load_dataset().unwrap();
        assert_eq!(dataset.users.len(), 4);
        assert_eq!(dataset.referrers.len(), 4);
        assert_eq!(dataset.sales_team.len(), 2);
        assert_eq!(dataset.platforms.len(), 4);
        assert_eq!(dataset.platforms[0].amount, 71048.0);
        assert_eq!(dataset.chart("q3").len(), 5);
        assert_eq!(dataset.chart("q2").len(), 5);
    }

    #[test]
    fn test_sales_records_resolve_users() {
        let dataset = load_dataset().unwrap();
        let mikasa = &dataset.sales_team[1];
        assert_eq!(mikasa.user.name, "Mikasa A.");
        assert_eq!(mikasa.trend, Trend::Down);
        assert_eq!(dataset.sales_team[0].user.initials, "AA");
    }

    #[test]
    fn test_referrer_shares_within_bounds() {
        let dataset = load_dataset().unwrap();
        let share: u32 = dataset.referrers.iter().map(|r| u32::from(r.percentage)).sum();
        assert!(share <= 100);
    }

    #[test]
    fn test_unknown_user_is_rejected() {
        let json = r#"{
            "users": [],
            "referrers": [],
            "sales_team": [
                { "user_id": "9", "revenue": 1, "leads": 1, "kpi": 1, "win_loss": 0.5, "win_rate": 1, "trend": "up" }
            ]
        }"#;
        let err = Dataset::from_json(json).unwrap_err();
        assert!(err.to_string().contains("unknown user '9'"));
    }

    #[test]
    fn test_missing_chart_is_empty() {
        let dataset = load_dataset().unwrap();
        assert!(dataset.chart("q1").is_empty());
    }
}
