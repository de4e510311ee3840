use serde::{Deserialize, Serialize};

/// Member of the sales team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Display name, e.g. "Armin A."
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
    pub initials: String,
}

impl User {
    /// First word of the display name ("Mikasa A." -> "Mikasa")
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
