pub mod documents;
pub mod job_refs;
pub mod jobs;
pub mod plan_resolver;
