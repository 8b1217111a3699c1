pub mod document_kinds;
pub mod plan_tiers;
pub mod subscription_statuses;
