use serde::{Deserialize, Serialize};

pub type MemberId = u32;

/// A member of the hiring team who can join interviews
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub designation: String,
    /// Whether the scheduler can read this member's calendar
    #[serde(default)]
    pub calendar_access: bool,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl TeamMember {
    /// Initials used as an avatar stand-in ("Rajesh Kumar" -> "RK")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}
