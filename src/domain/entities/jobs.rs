use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::jobs;

/// One logged job. `booking_date` holds the normalized `DD/MM/YYYY` form;
/// `job_ref` is null only on legacy rows that predate reference allocation.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable, Serialize)]
#[diesel(table_name = jobs)]
pub struct JobEntity {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub job_ref: Option<String>,
    pub booking_date: String,
    pub pickup: String,
    pub dropoff: String,
    pub fare_minor: i32,
    pub tip_minor: i32,
    pub platform: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = jobs)]
pub struct InsertJobEntity {
    pub driver_id: Uuid,
    pub job_ref: Option<String>,
    pub booking_date: String,
    pub pickup: String,
    pub dropoff: String,
    pub fare_minor: i32,
    pub tip_minor: i32,
    pub platform: String,
    pub notes: Option<String>,
}
