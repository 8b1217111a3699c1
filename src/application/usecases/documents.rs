use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    entities::driver_documents::DriverDocumentEntity,
    repositories::driver_documents::DriverDocumentRepository,
    value_objects::{documents::DocumentStatus, enums::document_kinds::DocumentKind},
};

#[derive(Debug, Clone, Serialize)]
pub struct DocumentWithStatus {
    pub id: Uuid,
    pub kind: DocumentKind,
    pub expires_at: DateTime<Utc>,
    pub status: DocumentStatus,
}

pub struct DocumentUseCase<D>
where
    D: DriverDocumentRepository + Send + Sync + 'static,
{
    document_repo: Arc<D>,
}

impl<D> DocumentUseCase<D>
where
    D: DriverDocumentRepository + Send + Sync + 'static,
{
    pub fn new(document_repo: Arc<D>) -> Self {
        Self { document_repo }
    }

    /// Lists a driver's compliance documents with their derived status. Status
    /// is computed against the current clock on every call, never stored.
    pub async fn list_with_status(&self, driver_id: Uuid) -> Result<Vec<DocumentWithStatus>> {
        let documents = self.document_repo.list_for_driver(driver_id).await?;
        let now = Utc::now();

        Ok(documents.into_iter().map(|doc| with_status(doc, now)).collect())
    }
}

fn with_status(doc: DriverDocumentEntity, now: DateTime<Utc>) -> DocumentWithStatus {
    DocumentWithStatus {
        id: doc.id,
        kind: DocumentKind::from_str(&doc.kind),
        expires_at: doc.expires_at,
        status: DocumentStatus::derive(doc.expires_at, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::driver_documents::MockDriverDocumentRepository;
    use chrono::Duration;
    use mockall::predicate::eq;

    fn sample_document(driver_id: Uuid, kind: &str, expires_at: DateTime<Utc>) -> DriverDocumentEntity {
        DriverDocumentEntity {
            id: Uuid::new_v4(),
            driver_id,
            kind: kind.to_string(),
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn derives_a_status_per_document() {
        let driver_id = Uuid::new_v4();
        let now = Utc::now();

        let documents = vec![
            sample_document(driver_id, "insurance", now - Duration::days(2)),
            sample_document(driver_id, "mot", now + Duration::days(10)),
            sample_document(driver_id, "driving_licence", now + Duration::days(400)),
        ];

        let mut document_repo = MockDriverDocumentRepository::new();
        document_repo
            .expect_list_for_driver()
            .with(eq(driver_id))
            .returning(move |_| {
                let documents = documents.clone();
                Box::pin(async move { Ok(documents) })
            });

        let usecase = DocumentUseCase::new(Arc::new(document_repo));
        let listed = usecase.list_with_status(driver_id).await.unwrap();

        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].status, DocumentStatus::Expired);
        assert_eq!(listed[0].kind, DocumentKind::Insurance);
        assert_eq!(listed[1].status, DocumentStatus::ExpiringSoon);
        assert_eq!(listed[1].kind, DocumentKind::Mot);
        assert_eq!(listed[2].status, DocumentStatus::Valid);
        assert_eq!(listed[2].kind, DocumentKind::DrivingLicence);
    }
}
