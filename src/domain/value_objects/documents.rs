use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Days before expiry at which a document starts flagging on the dashboard.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Derived compliance state of a document. Never stored; recomputed from
/// `expires_at` whenever documents are listed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Valid,
    ExpiringSoon,
    Expired,
}

impl DocumentStatus {
    pub fn derive(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if expires_at < now {
            DocumentStatus::Expired
        } else if expires_at <= now + Duration::days(EXPIRY_WARNING_DAYS) {
            DocumentStatus::ExpiringSoon
        } else {
            DocumentStatus::Valid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_when_past_expiry() {
        let now = Utc::now();
        let status = DocumentStatus::derive(now - Duration::seconds(1), now);
        assert_eq!(status, DocumentStatus::Expired);
    }

    #[test]
    fn expiring_soon_inside_the_warning_window() {
        let now = Utc::now();
        assert_eq!(
            DocumentStatus::derive(now + Duration::days(EXPIRY_WARNING_DAYS), now),
            DocumentStatus::ExpiringSoon
        );
        assert_eq!(
            DocumentStatus::derive(now + Duration::days(1), now),
            DocumentStatus::ExpiringSoon
        );
    }

    #[test]
    fn valid_beyond_the_warning_window() {
        let now = Utc::now();
        let status =
            DocumentStatus::derive(now + Duration::days(EXPIRY_WARNING_DAYS) + Duration::seconds(1), now);
        assert_eq!(status, DocumentStatus::Valid);
    }
}
