use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::result::DatabaseErrorKind;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use uuid::Uuid;

use crate::{
    domain::{
        entities::jobs::{InsertJobEntity, JobEntity},
        repositories::jobs::{JobRefWriteError, JobRepository},
        value_objects::job_refs::{self, JOB_REF_PREFIX},
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::jobs},
};

pub struct JobPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl JobPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

fn into_ref_write_error(err: diesel::result::Error) -> JobRefWriteError {
    match err {
        diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            JobRefWriteError::DuplicateRef
        }
        other => JobRefWriteError::Other(other.into()),
    }
}

#[async_trait]
impl JobRepository for JobPostgres {
    async fn max_ref_index_for_date(&self, date_key: &str) -> Result<Option<u32>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // The index is compared numerically, so the max cannot be taken in SQL
        // over the text column; fetch the day's references and parse.
        let pattern = format!("{JOB_REF_PREFIX}{date_key}-%");
        let references = jobs::table
            .filter(jobs::job_ref.like(pattern))
            .select(jobs::job_ref.assume_not_null())
            .load::<String>(&mut conn)?;

        Ok(references
            .iter()
            .filter_map(|reference| job_refs::parse_index(reference, date_key))
            .max())
    }

    async fn insert_job(&self, entity: InsertJobEntity) -> Result<JobEntity, JobRefWriteError> {
        let mut conn = Arc::clone(&self.db_pool)
            .get()
            .map_err(anyhow::Error::from)?;

        insert_into(jobs::table)
            .values(&entity)
            .returning(JobEntity::as_returning())
            .get_result::<JobEntity>(&mut conn)
            .map_err(into_ref_write_error)
    }

    async fn assign_job_ref(&self, job_id: Uuid, job_ref: &str) -> Result<(), JobRefWriteError> {
        let mut conn = Arc::clone(&self.db_pool)
            .get()
            .map_err(anyhow::Error::from)?;

        // The is_null guard keeps an already-referenced row from ever being
        // renumbered.
        update(jobs::table)
            .filter(jobs::id.eq(job_id))
            .filter(jobs::job_ref.is_null())
            .set(jobs::job_ref.eq(job_ref))
            .execute(&mut conn)
            .map_err(into_ref_write_error)?;

        Ok(())
    }

    async fn list_jobs_missing_ref(&self) -> Result<Vec<JobEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = jobs::table
            .filter(jobs::job_ref.is_null())
            .order(jobs::created_at.asc())
            .select(JobEntity::as_select())
            .load::<JobEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_jobs_for_driver(&self, driver_id: Uuid) -> Result<Vec<JobEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = jobs::table
            .filter(jobs::driver_id.eq(driver_id))
            .order(jobs::created_at.desc())
            .select(JobEntity::as_select())
            .load::<JobEntity>(&mut conn)?;

        Ok(results)
    }
}
