use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    repositories::drivers::DriverRepository,
    value_objects::{
        enums::{plan_tiers::PlanTier, subscription_statuses::SubscriptionStatus},
        plans::PlanLimits,
    },
};

/// Days after the billing period ends during which a `past_due` subscription
/// still counts as active.
pub const GRACE_PERIOD_DAYS: i64 = 3;

/// Whether the subscription currently unlocks paid features. Total over any
/// status string; a missing period end on a `past_due` record means inactive.
pub fn is_subscription_active(status: &str, current_period_end: Option<DateTime<Utc>>) -> bool {
    is_subscription_active_at(status, current_period_end, Utc::now())
}

fn is_subscription_active_at(
    status: &str,
    current_period_end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    match SubscriptionStatus::from_str(status) {
        SubscriptionStatus::Active | SubscriptionStatus::Trialing => true,
        SubscriptionStatus::PastDue => match current_period_end {
            Some(period_end) => now <= period_end + Duration::days(GRACE_PERIOD_DAYS),
            None => false,
        },
        SubscriptionStatus::Canceled | SubscriptionStatus::Unknown => false,
    }
}

/// Limits the driver actually gets right now. Lapsed, canceled, and
/// expired-grace subscribers keep their stored plan label but are served the
/// free tier's limits.
pub fn effective_limits(
    plan: &str,
    status: &str,
    current_period_end: Option<DateTime<Utc>>,
) -> PlanLimits {
    effective_limits_at(plan, status, current_period_end, Utc::now())
}

fn effective_limits_at(
    plan: &str,
    status: &str,
    current_period_end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> PlanLimits {
    if is_subscription_active_at(status, current_period_end, now) {
        PlanTier::from_str(plan).limits()
    } else {
        PlanTier::Free.limits()
    }
}

/// Resolves the effective limits for a driver: active paid subscription or free
/// tier fallback.
pub struct PlanResolver<D>
where
    D: DriverRepository + Send + Sync + 'static,
{
    driver_repo: Arc<D>,
}

impl<D> PlanResolver<D>
where
    D: DriverRepository + Send + Sync + 'static,
{
    pub fn new(driver_repo: Arc<D>) -> Self {
        Self { driver_repo }
    }

    pub async fn effective_limits_for_driver(&self, driver_id: Uuid) -> Result<PlanLimits> {
        let snapshot = self.driver_repo.find_subscription_snapshot(driver_id).await?;

        debug!(
            %driver_id,
            plan = %snapshot.plan,
            status = %snapshot.status,
            "plan_resolver: resolving effective limits"
        );

        Ok(effective_limits(
            &snapshot.plan,
            &snapshot.status,
            snapshot.current_period_end,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        repositories::drivers::MockDriverRepository,
        value_objects::subscriptions::SubscriptionSnapshot,
    };
    use mockall::predicate::eq;

    #[test]
    fn active_and_trialing_ignore_the_period_end() {
        let now = Utc::now();
        let long_gone = Some(now - Duration::days(365));

        for status in ["active", "trialing"] {
            assert!(is_subscription_active_at(status, None, now));
            assert!(is_subscription_active_at(status, long_gone, now));
        }
    }

    #[test]
    fn past_due_is_active_through_the_grace_period_boundary() {
        let period_end = Utc::now();
        let boundary = period_end + Duration::days(GRACE_PERIOD_DAYS);

        assert!(is_subscription_active_at("past_due", Some(period_end), boundary));
        assert!(!is_subscription_active_at(
            "past_due",
            Some(period_end),
            boundary + Duration::seconds(1)
        ));
    }

    #[test]
    fn past_due_without_a_period_end_is_inactive() {
        assert!(!is_subscription_active_at("past_due", None, Utc::now()));
    }

    #[test]
    fn canceled_and_unrecognized_statuses_are_inactive() {
        let now = Utc::now();
        let future = Some(now + Duration::days(30));

        for status in ["canceled", "incomplete", "paused", ""] {
            assert!(!is_subscription_active_at(status, future, now));
        }
    }

    #[test]
    fn active_pro_gets_pro_limits() {
        let limits = effective_limits_at("pro", "active", None, Utc::now());
        assert_eq!(limits, PlanTier::Pro.limits());
    }

    #[test]
    fn canceled_pro_is_served_free_limits() {
        let limits = effective_limits_at("pro", "canceled", None, Utc::now());
        assert_eq!(limits, PlanTier::Free.limits());
    }

    #[test]
    fn unrecognized_plan_falls_back_to_free_even_while_active() {
        let limits = effective_limits_at("enterprise", "active", None, Utc::now());
        assert_eq!(limits, PlanTier::Free.limits());
    }

    #[tokio::test]
    async fn resolves_paid_limits_for_an_active_subscriber() {
        let driver_id = Uuid::new_v4();

        let mut driver_repo = MockDriverRepository::new();
        driver_repo
            .expect_find_subscription_snapshot()
            .with(eq(driver_id))
            .returning(|_| {
                Box::pin(async {
                    Ok(SubscriptionSnapshot {
                        plan: "business".to_string(),
                        status: "active".to_string(),
                        current_period_end: Some(Utc::now() + Duration::days(20)),
                    })
                })
            });

        let resolver = PlanResolver::new(Arc::new(driver_repo));
        let limits = resolver.effective_limits_for_driver(driver_id).await.unwrap();

        assert_eq!(limits, PlanTier::Business.limits());
    }

    #[tokio::test]
    async fn resolves_free_limits_for_a_lapsed_subscriber() {
        let driver_id = Uuid::new_v4();

        let mut driver_repo = MockDriverRepository::new();
        driver_repo
            .expect_find_subscription_snapshot()
            .with(eq(driver_id))
            .returning(|_| {
                Box::pin(async {
                    Ok(SubscriptionSnapshot {
                        plan: "pro".to_string(),
                        status: "past_due".to_string(),
                        current_period_end: Some(Utc::now() - Duration::days(10)),
                    })
                })
            });

        let resolver = PlanResolver::new(Arc::new(driver_repo));
        let limits = resolver.effective_limits_for_driver(driver_id).await.unwrap();

        assert_eq!(limits, PlanTier::Free.limits());
    }
}
