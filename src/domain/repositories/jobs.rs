use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::jobs::{InsertJobEntity, JobEntity};

/// Write failure on the reference column. `DuplicateRef` is the storage-level
/// unique-constraint rejection; only the backfill path retries it.
#[derive(Debug, Error)]
pub enum JobRefWriteError {
    #[error("job reference already exists")]
    DuplicateRef,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
#[automock]
pub trait JobRepository {
    /// Largest index among references matching `RYDE<date_key>-<N>`, across the
    /// whole job collection (references are global, not per driver).
    async fn max_ref_index_for_date(&self, date_key: &str) -> Result<Option<u32>>;

    async fn insert_job(&self, entity: InsertJobEntity) -> Result<JobEntity, JobRefWriteError>;

    async fn assign_job_ref(&self, job_id: Uuid, job_ref: &str) -> Result<(), JobRefWriteError>;

    /// Rows with no reference yet, oldest first. Rows that already carry one are
    /// excluded so re-running the backfill leaves them untouched.
    async fn list_jobs_missing_ref(&self) -> Result<Vec<JobEntity>>;

    async fn list_jobs_for_driver(&self, driver_id: Uuid) -> Result<Vec<JobEntity>>;
}
