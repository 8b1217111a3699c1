use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::{RunQueryDsl, prelude::*};
use uuid::Uuid;

use crate::{
    domain::{
        entities::drivers::DriverEntity, repositories::drivers::DriverRepository,
        value_objects::subscriptions::SubscriptionSnapshot,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::drivers},
};

pub struct DriverPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl DriverPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl DriverRepository for DriverPostgres {
    async fn find_by_id(&self, driver_id: Uuid) -> Result<DriverEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = drivers::table
            .filter(drivers::id.eq(driver_id))
            .select(DriverEntity::as_select())
            .first::<DriverEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_subscription_snapshot(&self, driver_id: Uuid) -> Result<SubscriptionSnapshot> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let (plan, status, current_period_end) = drivers::table
            .filter(drivers::id.eq(driver_id))
            .select((
                drivers::plan,
                drivers::subscription_status,
                drivers::current_period_end,
            ))
            .first::<(String, String, Option<DateTime<Utc>>)>(&mut conn)?;

        Ok(SubscriptionSnapshot {
            plan,
            status,
            current_period_end,
        })
    }
}
