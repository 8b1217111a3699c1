pub mod documents;
pub mod drivers;
pub mod jobs;
pub mod subscriptions;
