use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntitlementType {
    Flag,
    Limit,
    Meter,
}

impl EntitlementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntitlementType::Flag => "FLAG",
            EntitlementType::Limit => "LIMIT",
            EntitlementType::Meter => "METER",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "FLAG" => Some(EntitlementType::Flag),
            "LIMIT" => Some(EntitlementType::Limit),
            "METER" => Some(EntitlementType::Meter),
            _ => None,
        }
    }
}

impl Display for EntitlementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
