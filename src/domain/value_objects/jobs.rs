use serde::{Deserialize, Serialize};

/// Request body for logging a new job.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobModel {
    pub booking_date: String,
    pub pickup: String,
    pub dropoff: String,
    pub fare_minor: i32,
    #[serde(default)]
    pub tip_minor: i32,
    pub platform: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Dashboard aggregate over a booking-date range.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct EarningsSummary {
    pub job_count: u64,
    pub fare_minor_total: i64,
    pub tip_minor_total: i64,
}

/// Outcome counters for one backfill run.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct BackfillReport {
    pub assigned: u64,
    pub skipped: u64,
}
