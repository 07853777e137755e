//! Business logic services for the application layer.

pub mod campaign_service;
pub mod performance_service;

pub use campaign_service::CampaignService;
pub use performance_service::PerformanceService;
