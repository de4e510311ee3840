//! Dashboard configuration: the per-timeframe lookup table

use anyhow::Context;
use chrono::NaiveDate;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::enums::Timeframe;

/// Top-level revenue figures shown for a timeframe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadlineFigures {
    pub total: f64,
    /// Revenue of the comparison period
    pub prev: f64,
    /// Growth against the comparison period, percent
    pub trend: f64,
    pub cash: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeConfig {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// Entry label in the timeframe menu
    pub option_label: String,
    /// Label next to the "vs prev." figure
    pub comparison_label: String,
    /// Key of the chart dataset shown for this timeframe
    pub chart: String,
    pub referrer_multiplier: f64,
    pub sales_multiplier: f64,
    /// Multiplier for the highlighted seller at the top of the revenue card
    pub featured_multiplier: f64,
    pub headline: HeadlineFigures,
}

impl TimeframeConfig {
    /// "Sep 1 - Nov 30, 2023"
    pub fn period_label(&self) -> String {
        format!(
            "{} - {}",
            self.period_start.format("%b %-d"),
            self.period_end.format("%b %-d, %Y")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframesConfig {
    pub this_quarter: TimeframeConfig,
    pub last_quarter: TimeframeConfig,
    pub year_to_date: TimeframeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub timeframes: TimeframesConfig,
}

impl DashboardConfig {
    pub fn timeframe(&self, timeframe: Timeframe) -> &TimeframeConfig {
        match timeframe {
            Timeframe::ThisQuarter => &self.timeframes.this_quarter,
            Timeframe::LastQuarter => &self.timeframes.last_quarter,
            Timeframe::YearToDate => &self.timeframes.year_to_date,
        }
    }

    pub fn headline(&self, timeframe: Timeframe) -> HeadlineFigures {
        self.timeframe(timeframe).headline
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r##"
[timeframes.this_quarter]
period_start = "2023-09-01"
period_end = "2023-11-30"
option_label = "This Quarter (Sep-Nov)"
comparison_label = "Jun 1 - Aug 31, 2023"
chart = "q3"
referrer_multiplier = 1.0
sales_multiplier = 1.0
featured_multiplier = 1.0
headline = { total = 528976.82, prev = 501641.73, trend = 7.9, cash = 27335.09 }

[timeframes.last_quarter]
period_start = "2023-06-01"
period_end = "2023-08-31"
option_label = "Last Quarter (Jun-Aug)"
comparison_label = "Previous Period"
chart = "q2"
referrer_multiplier = 0.85
sales_multiplier = 0.9
featured_multiplier = 0.8
headline = { total = 501641.73, prev = 480200.10, trend = 4.5, cash = 21440.50 }

[timeframes.year_to_date]
period_start = "2023-01-01"
period_end = "2023-11-30"
option_label = "Year to Date"
comparison_label = "Previous Period"
chart = "q2"
referrer_multiplier = 3.5
sales_multiplier = 0.9
featured_multiplier = 0.8
headline = { total = 1850430.12, prev = 1420000.00, trend = 12.4, cash = 430500.22 }
"##;

static CONFIG: OnceCell<DashboardConfig> = OnceCell::new();

/// Parse a configuration document
pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig =
        toml::from_str(contents).context("invalid dashboard configuration")?;
    Ok(config)
}

/// Embedded configuration, parsed once per session
pub fn load_config() -> anyhow::Result<&'static DashboardConfig> {
    CONFIG.get_or_try_init(|| {
        log::info!("Using default embedded dashboard configuration");
        parse_config(DEFAULT_CONFIG)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.timeframe(Timeframe::ThisQuarter).chart, "q3");
        assert_eq!(config.timeframe(Timeframe::LastQuarter).referrer_multiplier, 0.85);
        assert_eq!(config.timeframe(Timeframe::YearToDate).referrer_multiplier, 3.5);
    }

    #[test]
    fn test_headline_lookup() {
        let config = load_config().unwrap();
        let headline = config.headline(Timeframe::ThisQuarter);
        assert_eq!(headline.total, 528976.82);
        assert_eq!(headline.prev, 501641.73);
        assert_eq!(headline.trend, 7.9);
        assert_eq!(headline.cash, 27335.09);
        assert_eq!(config.headline(Timeframe::YearToDate).total, 1850430.12);
    }

    #[test]
    fn test_period_labels() {
        let config = load_config().unwrap();
        assert_eq!(
            config.timeframe(Timeframe::ThisQuarter).period_label(),
            "Sep 1 - Nov 30, 2023"
        );
        assert_eq!(
            config.timeframe(Timeframe::LastQuarter).period_label(),
            "Jun 1 - Aug 31, 2023"
        );
        assert_eq!(
            config.timeframe(Timeframe::YearToDate).period_label(),
            "Jan 1 - Nov 30, 2023"
        );
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = parse_config("[timeframes]\nthis_quarter = 1").unwrap_err();
        assert!(err.to_string().contains("invalid dashboard configuration"));
    }
}
