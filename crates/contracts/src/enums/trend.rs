use serde::{Deserialize, Serialize};

/// Direction of a seller's recent performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn is_up(&self) -> bool {
        matches!(self, Trend::Up)
    }
}
