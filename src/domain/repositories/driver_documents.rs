use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::driver_documents::DriverDocumentEntity;

#[async_trait]
#[automock]
pub trait DriverDocumentRepository {
    async fn list_for_driver(&self, driver_id: Uuid) -> Result<Vec<DriverDocumentEntity>>;
}
