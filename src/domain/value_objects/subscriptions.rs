use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only billing state copied off the driver record. The hosted billing
/// provider owns these fields; we only ever read them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionSnapshot {
    pub plan: String,
    pub status: String,
    pub current_period_end: Option<DateTime<Utc>>,
}
