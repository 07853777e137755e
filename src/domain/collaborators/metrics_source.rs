//! Collaborator contract for campaign performance metrics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::CampaignId;

/// Aggregate performance figures for one campaign.
///
/// A point-in-time snapshot produced by the tracking system; fetching it
/// never mutates the campaign. `impressions >= clicks` is expected of any
/// real source but is not enforced here (see
/// [`PerformanceSnapshot::is_consistent`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    /// Conversion rate as a percentage.
    pub conversion_rate: f64,
    /// Attributed revenue in currency units.
    pub revenue: f64,
    pub clicks: u64,
    pub impressions: u64,
}

impl PerformanceSnapshot {
    /// Click-through rate as a percentage; zero when there are no impressions.
    pub fn ctr(&self) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            self.clicks as f64 / self.impressions as f64 * 100.0
        }
    }

    /// Whether the figures satisfy the `impressions >= clicks` sanity
    /// property.
    pub fn is_consistent(&self) -> bool {
        self.impressions >= self.clicks
    }
}

/// Errors surfaced by metrics backends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// The tracking system could not be reached.
    #[error("metrics backend unavailable: {message}")]
    Unavailable { message: String },
    /// The tracking system answered with an unusable payload.
    #[error("metrics payload malformed: {message}")]
    Malformed { message: String },
}

impl MetricsError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Produces performance snapshots for campaigns.
///
/// # Implementations
///
/// - [`crate::infrastructure::metrics::StaticMetricsSource`] - fixed snapshot source
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Fetches the current snapshot for a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError`] when the backend fails; the registry
    /// propagates it unchanged.
    async fn fetch(&self, campaign_id: &CampaignId) -> Result<PerformanceSnapshot, MetricsError>;
}
