use serde::{Deserialize, Serialize};

use crate::shared::list_utils::Searchable;

/// External traffic source with the revenue attributed to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referrer {
    pub name: String,
    /// Base amount for the current period, whole currency units
    pub amount: f64,
    /// Share of all referred revenue, 0-100
    pub percentage: u8,
    pub icon: String,
    /// Brand color, hex
    pub color: String,
}

impl Searchable for Referrer {
    fn search_text(&self) -> &str {
        &self.name
    }
}
