pub mod driver_documents;
pub mod drivers;
pub mod jobs;
