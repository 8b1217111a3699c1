use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::{
    entities::jobs::JobEntity,
    repositories::jobs::{JobRefWriteError, JobRepository},
    value_objects::{
        booking_dates::{BookingDate, ParseBookingDateError},
        job_refs,
        jobs::BackfillReport,
    },
};

/// Retry bound for the backfill path. Allocation is optimistic; past this many
/// duplicate-key rejections for one job we log and move on.
pub const MAX_BACKFILL_ATTEMPTS: u32 = 50;

#[derive(Debug, Error)]
pub enum JobRefError {
    #[error(transparent)]
    InvalidDate(#[from] ParseBookingDateError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Allocates human-readable, date-scoped job references of the form
/// `RYDE<DDMMYYYY>-<N>`. Uniqueness is enforced by the unique index on the
/// reference column, not by this allocator.
pub struct JobRefAllocator<J>
where
    J: JobRepository + Send + Sync + 'static,
{
    job_repo: Arc<J>,
}

impl<J> JobRefAllocator<J>
where
    J: JobRepository + Send + Sync + 'static,
{
    pub fn new(job_repo: Arc<J>) -> Self {
        Self { job_repo }
    }

    /// Single-shot allocation used at job creation. Does not retry: a concurrent
    /// allocation of the same reference surfaces as a duplicate-key rejection on
    /// the insert, and the caller reports the creation failure.
    pub async fn generate_job_ref(&self, booking_date: &str) -> Result<String, JobRefError> {
        let date = BookingDate::parse(booking_date)?;
        let date_key = date.date_key();

        let index = self.next_index(&date_key, 1).await?;
        Ok(job_refs::format_job_ref(&date_key, index))
    }

    /// Migration pass assigning references to legacy rows that lack one.
    /// Processes dates in order and, within a date, rows in creation order so
    /// numbering stays chronological. Per-item failures are logged and skipped;
    /// the batch always runs to completion.
    pub async fn backfill_job_refs(&self) -> Result<BackfillReport> {
        let jobs = self.job_repo.list_jobs_missing_ref().await?;
        info!("backfill: {} jobs missing a reference", jobs.len());

        let mut report = BackfillReport::default();
        let mut groups: BTreeMap<BookingDate, Vec<JobEntity>> = BTreeMap::new();

        for job in jobs {
            match BookingDate::parse(&job.booking_date) {
                Ok(date) => groups.entry(date).or_default().push(job),
                Err(err) => {
                    warn!(job_id = %job.id, "backfill: skipping malformed booking date: {}", err);
                    report.skipped += 1;
                }
            }
        }

        for (date, group) in groups {
            let date_key = date.date_key();

            for job in group {
                match self.assign_with_retry(&job, &date_key).await {
                    Ok(reference) => {
                        info!(job_id = %job.id, %reference, "backfill: reference assigned");
                        report.assigned += 1;
                    }
                    Err(err) => {
                        error!(job_id = %job.id, "backfill: giving up on job: {}", err);
                        report.skipped += 1;
                    }
                }
            }
        }

        Ok(report)
    }

    /// Highest existing index for the date plus `bump`. The retry path passes the
    /// attempt count as the bump, which skips contended slots instead of
    /// re-colliding on the same one.
    async fn next_index(&self, date_key: &str, bump: u32) -> Result<u32> {
        let max = self.job_repo.max_ref_index_for_date(date_key).await?;
        Ok(max.unwrap_or(0) + bump)
    }

    async fn assign_with_retry(&self, job: &JobEntity, date_key: &str) -> Result<String> {
        for attempt in 1..=MAX_BACKFILL_ATTEMPTS {
            let index = self.next_index(date_key, attempt).await?;
            let reference = job_refs::format_job_ref(date_key, index);

            match self.job_repo.assign_job_ref(job.id, &reference).await {
                Ok(()) => return Ok(reference),
                Err(JobRefWriteError::DuplicateRef) => {
                    debug!(job_id = %job.id, %reference, attempt, "backfill: reference taken, retrying");
                }
                Err(JobRefWriteError::Other(err)) => return Err(err),
            }
        }

        Err(anyhow!(
            "no free reference for date {date_key} within {MAX_BACKFILL_ATTEMPTS} attempts"
        ))
    }
}
