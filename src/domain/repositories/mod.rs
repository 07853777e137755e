//! Repository traits (ports) for data access.
//!
//! Concrete implementations live in the infrastructure layer; services only
//! ever see these traits.

pub mod campaign_repository;

pub use campaign_repository::CampaignRepository;

#[cfg(test)]
pub use campaign_repository::MockCampaignRepository;
