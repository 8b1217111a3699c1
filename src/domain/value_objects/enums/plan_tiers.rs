use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Nominal purchased plan tier stored on the driver record. An unrecognized tier
/// label degrades to `Free` rather than failing.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
    Business,
}

impl Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tier = match self {
            PlanTier::Free => "free",
            PlanTier::Pro => "pro",
            PlanTier::Business => "business",
        };
        write!(f, "{}", tier)
    }
}

impl PlanTier {
    pub fn from_str(value: &str) -> Self {
        match value {
            "free" => PlanTier::Free,
            "pro" => PlanTier::Pro,
            "business" => PlanTier::Business,
            _ => PlanTier::Free,
        }
    }
}
