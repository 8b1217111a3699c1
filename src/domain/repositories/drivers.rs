use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::drivers::DriverEntity;
use crate::domain::value_objects::subscriptions::SubscriptionSnapshot;

#[async_trait]
#[automock]
pub trait DriverRepository {
    async fn find_by_id(&self, driver_id: Uuid) -> Result<DriverEntity>;

    async fn find_subscription_snapshot(&self, driver_id: Uuid) -> Result<SubscriptionSnapshot>;
}
