pub mod booking_dates;
pub mod documents;
pub mod enums;
pub mod job_refs;
pub mod jobs;
pub mod plans;
pub mod subscriptions;
