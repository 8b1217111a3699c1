use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use uuid::Uuid;

use crate::{
    domain::{
        entities::driver_documents::DriverDocumentEntity,
        repositories::driver_documents::DriverDocumentRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::driver_documents},
};

pub struct DriverDocumentPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl DriverDocumentPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl DriverDocumentRepository for DriverDocumentPostgres {
    async fn list_for_driver(&self, driver_id: Uuid) -> Result<Vec<DriverDocumentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = driver_documents::table
            .filter(driver_documents::driver_id.eq(driver_id))
            .order(driver_documents::expires_at.asc())
            .select(DriverDocumentEntity::as_select())
            .load::<DriverDocumentEntity>(&mut conn)?;

        Ok(results)
    }
}
