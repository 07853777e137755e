//! # Campaign Tracker
//!
//! An affiliate-marketing campaign registry: campaign lifecycle, product
//! assignment, tracking link generation and performance monitoring.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Campaign aggregate, collaborator ports and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and default collaborators
//!
//! ## Features
//!
//! - Lifetime-unique campaign ids from a store-owned counter
//! - Full-replacement product assignment through a pluggable selector
//! - Campaign-scoped tracking link ordinals
//! - Configurable retention for links orphaned by reassignment
//! - Read-only performance snapshots from a pluggable metrics source
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use campaign_tracker::prelude::*;
//!
//! let config = campaign_tracker::config::load_from_env()?;
//! let repository = Arc::new(InMemoryCampaignRepository::new());
//! let service = CampaignService::new(
//!     repository,
//!     Arc::new(PassthroughSelector::new()),
//!     config.platforms,
//!     config.link_retention,
//! );
//!
//! let campaign = service
//!     .create_campaign(NewCampaign::new("Summer Sale", "Facebook"))
//!     .await?;
//! ```
//!
//! ## Configuration
//!
//! Platform base URLs and the link retention policy are loaded from
//! environment variables via [`config::Config`]. See [`config`] module for
//! available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;

pub use config::Config;
pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CampaignService, PerformanceService};
    pub use crate::config::{Config, PlatformCatalog};
    pub use crate::domain::collaborators::{
        MetricsSource, PerformanceSnapshot, ProductSelector,
    };
    pub use crate::domain::entities::{
        Campaign, CampaignId, CampaignStatus, LinkRetention, NewCampaign, Product, ProductId,
    };
    pub use crate::domain::repositories::CampaignRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::metrics::StaticMetricsSource;
    pub use crate::infrastructure::persistence::InMemoryCampaignRepository;
    pub use crate::infrastructure::selection::PassthroughSelector;
}
