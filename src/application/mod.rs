//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and collaborator contracts. Services consume the domain traits
//! and provide the crate's public API.
//!
//! # Available Services
//!
//! - [`services::campaign_service::CampaignService`] - Campaign creation, product assignment and tracking links
//! - [`services::performance_service::PerformanceService`] - Read-only performance monitoring

pub mod services;
