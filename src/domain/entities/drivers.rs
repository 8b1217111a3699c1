use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::drivers;

/// Driver account row. The plan/status/period fields are written by the billing
/// webhook handler and read here as a subscription snapshot.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable, Serialize)]
#[diesel(table_name = drivers)]
pub struct DriverEntity {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub plan: String,
    pub subscription_status: String,
    pub current_period_end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
