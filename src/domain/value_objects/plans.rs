use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::plan_tiers::PlanTier;

/// Sentinel for "no cap" on a numeric limit.
pub const UNLIMITED: i32 = -1;

/// Feature limits attached to a plan tier. Purely derived, recomputed on every
/// resolution, never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanLimits {
    pub can_view_history: bool,
    pub ai_summary_limit: i32,
    pub can_use_mood_analytics: bool,
    pub can_search_entries: bool,
    pub max_entries_per_day: i32,
}

impl PlanLimits {
    pub fn has_unlimited_ai_summaries(&self) -> bool {
        self.ai_summary_limit == UNLIMITED
    }

    pub fn has_unlimited_entries(&self) -> bool {
        self.max_entries_per_day == UNLIMITED
    }
}

const FREE_LIMITS: PlanLimits = PlanLimits {
    can_view_history: false,
    ai_summary_limit: 5,
    can_use_mood_analytics: false,
    can_search_entries: false,
    max_entries_per_day: 3,
};

// Pro and business currently carry identical limits; they differ only in price
// and seat count on the billing side.
const PAID_LIMITS: PlanLimits = PlanLimits {
    can_view_history: true,
    ai_summary_limit: UNLIMITED,
    can_use_mood_analytics: true,
    can_search_entries: true,
    max_entries_per_day: UNLIMITED,
};

impl PlanTier {
    /// Fixed plan table: every tier has exactly one entry.
    pub fn limits(self) -> PlanLimits {
        match self {
            PlanTier::Free => FREE_LIMITS,
            PlanTier::Pro => PAID_LIMITS,
            PlanTier::Business => PAID_LIMITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_tier_is_the_most_restrictive_entry() {
        let free = PlanTier::Free.limits();
        let pro = PlanTier::Pro.limits();

        assert!(!free.can_view_history && pro.can_view_history);
        assert!(!free.can_use_mood_analytics && pro.can_use_mood_analytics);
        assert!(!free.can_search_entries && pro.can_search_entries);
        assert!(!free.has_unlimited_ai_summaries() && pro.has_unlimited_ai_summaries());
        assert!(!free.has_unlimited_entries() && pro.has_unlimited_entries());
    }

    #[test]
    fn pro_and_business_share_one_limit_set() {
        assert_eq!(PlanTier::Pro.limits(), PlanTier::Business.limits());
    }

    #[test]
    fn unknown_tier_label_degrades_to_free() {
        assert_eq!(PlanTier::from_str("enterprise"), PlanTier::Free);
        assert_eq!(PlanTier::from_str(""), PlanTier::Free);
    }

    // The dashboard reads these field names as-is; renames break clients.
    #[test]
    fn limits_serialize_with_stable_field_names() {
        let json = serde_json::to_value(PlanTier::Pro.limits()).unwrap();

        assert_eq!(json["can_view_history"], true);
        assert_eq!(json["ai_summary_limit"], UNLIMITED);
        assert_eq!(json["can_use_mood_analytics"], true);
        assert_eq!(json["can_search_entries"], true);
        assert_eq!(json["max_entries_per_day"], UNLIMITED);
    }
}
