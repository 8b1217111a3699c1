use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::usecases::job_refs::{JobRefAllocator, JobRefError};
use crate::domain::{
    entities::jobs::{InsertJobEntity, JobEntity},
    repositories::jobs::{JobRefWriteError, JobRepository},
    value_objects::{
        booking_dates::BookingDate,
        jobs::{BackfillReport, CreateJobModel, EarningsSummary},
    },
};

#[derive(Debug, Error)]
pub enum JobError {
    #[error("booking date must be DD/MM/YYYY or YYYY-MM-DD")]
    InvalidBookingDate,
    #[error("job reference was taken by a concurrent booking, please retry")]
    RefConflict,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl JobError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            JobError::InvalidBookingDate => StatusCode::BAD_REQUEST,
            JobError::RefConflict => StatusCode::CONFLICT,
            JobError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JobRefError> for JobError {
    fn from(err: JobRefError) -> Self {
        match err {
            JobRefError::InvalidDate(_) => JobError::InvalidBookingDate,
            JobRefError::Internal(err) => JobError::Internal(err),
        }
    }
}

pub type JobResult<T> = std::result::Result<T, JobError>;

pub struct JobUseCase<J>
where
    J: JobRepository + Send + Sync + 'static,
{
    job_repo: Arc<J>,
    allocator: JobRefAllocator<J>,
}

impl<J> JobUseCase<J>
where
    J: JobRepository + Send + Sync + 'static,
{
    pub fn new(job_repo: Arc<J>) -> Self {
        let allocator = JobRefAllocator::new(Arc::clone(&job_repo));
        Self {
            job_repo,
            allocator,
        }
    }

    /// Logs a job with a freshly allocated reference. Allocation is single-shot:
    /// if a concurrent booking grabbed the same reference first, the unique
    /// index rejects the insert and the whole creation fails with `RefConflict`.
    pub async fn create_job(&self, driver_id: Uuid, model: CreateJobModel) -> JobResult<JobEntity> {
        let booking_date =
            BookingDate::parse(&model.booking_date).map_err(|_| JobError::InvalidBookingDate)?;
        let job_ref = self.allocator.generate_job_ref(&model.booking_date).await?;

        let entity = InsertJobEntity {
            driver_id,
            job_ref: Some(job_ref.clone()),
            booking_date: booking_date.display(),
            pickup: model.pickup,
            dropoff: model.dropoff,
            fare_minor: model.fare_minor,
            tip_minor: model.tip_minor,
            platform: model.platform,
            notes: model.notes,
        };

        let job = self.job_repo.insert_job(entity).await.map_err(|err| match err {
            JobRefWriteError::DuplicateRef => {
                warn!(%driver_id, %job_ref, "create_job: lost reference race");
                JobError::RefConflict
            }
            JobRefWriteError::Other(err) => JobError::Internal(err),
        })?;

        info!(%driver_id, job_id = %job.id, %job_ref, "job logged");
        Ok(job)
    }

    pub async fn list_jobs(&self, driver_id: Uuid) -> JobResult<Vec<JobEntity>> {
        Ok(self.job_repo.list_jobs_for_driver(driver_id).await?)
    }

    /// Totals fares and tips over an inclusive booking-date range. Jobs whose
    /// stored date no longer parses are left out of the figure.
    pub async fn earnings_summary(
        &self,
        driver_id: Uuid,
        from: &str,
        to: &str,
    ) -> JobResult<EarningsSummary> {
        let from = BookingDate::parse(from).map_err(|_| JobError::InvalidBookingDate)?;
        let to = BookingDate::parse(to).map_err(|_| JobError::InvalidBookingDate)?;

        let jobs = self.job_repo.list_jobs_for_driver(driver_id).await?;

        let mut summary = EarningsSummary::default();
        for job in jobs {
            let Some(date) = BookingDate::parse(&job.booking_date).ok() else {
                continue;
            };
            if date < from || date > to {
                continue;
            }
            summary.job_count += 1;
            summary.fare_minor_total += i64::from(job.fare_minor);
            summary.tip_minor_total += i64::from(job.tip_minor);
        }

        Ok(summary)
    }

    pub async fn backfill_job_refs(&self) -> JobResult<BackfillReport> {
        Ok(self.allocator.backfill_job_refs().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::jobs::MockJobRepository;
    use chrono::Utc;
    use mockall::predicate::{always, eq};

    fn sample_model() -> CreateJobModel {
        CreateJobModel {
            booking_date: "2025-01-05".to_string(),
            pickup: "Station".to_string(),
            dropoff: "Harbour".to_string(),
            fare_minor: 1800,
            tip_minor: 200,
            platform: "uber".to_string(),
            notes: None,
        }
    }

    fn inserted(entity: InsertJobEntity) -> JobEntity {
        JobEntity {
            id: Uuid::new_v4(),
            driver_id: entity.driver_id,
            job_ref: entity.job_ref,
            booking_date: entity.booking_date,
            pickup: entity.pickup,
            dropoff: entity.dropoff,
            fare_minor: entity.fare_minor,
            tip_minor: entity.tip_minor,
            platform: entity.platform,
            notes: entity.notes,
            created_at: Utc::now(),
        }
    }

    fn sample_job(driver_id: Uuid, booking_date: &str, fare: i32, tip: i32) -> JobEntity {
        JobEntity {
            id: Uuid::new_v4(),
            driver_id,
            job_ref: Some("RYDE05012025-1".to_string()),
            booking_date: booking_date.to_string(),
            pickup: "A".to_string(),
            dropoff: "B".to_string(),
            fare_minor: fare,
            tip_minor: tip,
            platform: "bolt".to_string(),
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_job_allocates_a_reference_and_normalizes_the_date() {
        let driver_id = Uuid::new_v4();

        let mut job_repo = MockJobRepository::new();
        job_repo
            .expect_max_ref_index_for_date()
            .with(eq("05012025"))
            .returning(|_| Box::pin(async { Ok(None) }));
        job_repo
            .expect_insert_job()
            .with(always())
            .returning(|entity| Box::pin(async move { Ok(inserted(entity)) }));

        let usecase = JobUseCase::new(Arc::new(job_repo));
        let job = usecase.create_job(driver_id, sample_model()).await.unwrap();

        assert_eq!(job.job_ref.as_deref(), Some("RYDE05012025-1"));
        assert_eq!(job.booking_date, "05/01/2025");
        assert_eq!(job.driver_id, driver_id);
    }

    #[tokio::test]
    async fn create_job_surfaces_a_lost_race_as_a_conflict() {
        let mut job_repo = MockJobRepository::new();
        job_repo
            .expect_max_ref_index_for_date()
            .returning(|_| Box::pin(async { Ok(Some(4)) }));
        job_repo
            .expect_insert_job()
            .returning(|_| Box::pin(async { Err(JobRefWriteError::DuplicateRef) }));

        let usecase = JobUseCase::new(Arc::new(job_repo));
        let err = usecase
            .create_job(Uuid::new_v4(), sample_model())
            .await
            .unwrap_err();

        assert!(matches!(err, JobError::RefConflict));
        assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn create_job_rejects_a_malformed_booking_date() {
        let usecase = JobUseCase::new(Arc::new(MockJobRepository::new()));

        let mut model = sample_model();
        model.booking_date = "5th of January".to_string();

        let err = usecase.create_job(Uuid::new_v4(), model).await.unwrap_err();
        assert!(matches!(err, JobError::InvalidBookingDate));
    }

    #[tokio::test]
    async fn earnings_summary_filters_by_booking_date_range() {
        let driver_id = Uuid::new_v4();

        let jobs = vec![
            sample_job(driver_id, "04/01/2025", 1000, 100),
            sample_job(driver_id, "05/01/2025", 2000, 0),
            sample_job(driver_id, "06/01/2025", 3000, 300),
            sample_job(driver_id, "07/01/2025", 9999, 999),
        ];

        let mut job_repo = MockJobRepository::new();
        job_repo
            .expect_list_jobs_for_driver()
            .with(eq(driver_id))
            .returning(move |_| {
                let jobs = jobs.clone();
                Box::pin(async move { Ok(jobs) })
            });

        let usecase = JobUseCase::new(Arc::new(job_repo));
        let summary = usecase
            .earnings_summary(driver_id, "2025-01-05", "2025-01-06")
            .await
            .unwrap();

        assert_eq!(summary.job_count, 2);
        assert_eq!(summary.fare_minor_total, 5000);
        assert_eq!(summary.tip_minor_total, 300);
    }
}
