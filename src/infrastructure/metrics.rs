//! Metrics source implementations.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::collaborators::{MetricsError, MetricsSource, PerformanceSnapshot};
use crate::domain::entities::CampaignId;

/// A metrics source answering every campaign with one fixed snapshot.
///
/// Stands in for a real analytics backend in development and tests.
pub struct StaticMetricsSource {
    snapshot: PerformanceSnapshot,
}

impl StaticMetricsSource {
    /// Creates a source that always answers with `snapshot`.
    pub fn new(snapshot: PerformanceSnapshot) -> Self {
        debug!("Using StaticMetricsSource (analytics disabled)");
        Self { snapshot }
    }
}

impl Default for StaticMetricsSource {
    fn default() -> Self {
        Self::new(PerformanceSnapshot {
            conversion_rate: 3.5,
            revenue: 1234.56,
            clicks: 1000,
            impressions: 5000,
        })
    }
}

#[async_trait]
impl MetricsSource for StaticMetricsSource {
    async fn fetch(&self, _campaign_id: &CampaignId) -> Result<PerformanceSnapshot, MetricsError> {
        Ok(self.snapshot)
    }
}
