use serde::{Deserialize, Serialize};

/// Ordering applied to the referrer list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferrerSort {
    /// Highest amount first
    #[default]
    AmountDesc,
    /// Lowest amount first
    AmountAsc,
    /// Name, A-Z
    Name,
}

impl ReferrerSort {
    /// Code used in DOM `data-code` attributes
    pub fn code(&self) -> &'static str {
        match self {
            ReferrerSort::AmountDesc => "amount-desc",
            ReferrerSort::AmountAsc => "amount-asc",
            ReferrerSort::Name => "name",
        }
    }

    /// Label shown in the "Sort By" menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            ReferrerSort::AmountDesc => "Highest Value",
            ReferrerSort::AmountAsc => "Lowest Value",
            ReferrerSort::Name => "Name (A-Z)",
        }
    }

    pub fn all() -> Vec<ReferrerSort> {
        vec![
            ReferrerSort::AmountDesc,
            ReferrerSort::AmountAsc,
            ReferrerSort::Name,
        ]
    }
}
