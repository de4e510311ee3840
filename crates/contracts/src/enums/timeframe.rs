use serde::{Deserialize, Serialize};

/// Reporting period the dashboard displays figures for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    /// Current period (Sep - Nov)
    #[default]
    ThisQuarter,
    /// Previous period (Jun - Aug)
    LastQuarter,
    YearToDate,
}

impl Timeframe {
    /// Code used in DOM `data-code` attributes and log output
    pub fn code(&self) -> &'static str {
        match self {
            Timeframe::ThisQuarter => "this-quarter",
            Timeframe::LastQuarter => "last-quarter",
            Timeframe::YearToDate => "year-to-date",
        }
    }

    /// All selectable timeframes in menu order
    pub fn all() -> Vec<Timeframe> {
        vec![
            Timeframe::ThisQuarter,
            Timeframe::LastQuarter,
            Timeframe::YearToDate,
        ]
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_current_period() {
        assert_eq!(Timeframe::default(), Timeframe::ThisQuarter);
        assert_eq!(Timeframe::all()[0], Timeframe::default());
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(Timeframe::YearToDate.to_string(), "year-to-date");
        assert_eq!(
            serde_json::to_string(&Timeframe::LastQuarter).unwrap(),
            format!("\"{}\"", Timeframe::LastQuarter.code())
        );
    }
}
