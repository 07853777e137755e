//! Read-only campaign performance monitoring.

use std::sync::Arc;

use serde_json::json;

use crate::domain::collaborators::{MetricsSource, PerformanceSnapshot};
use crate::domain::entities::CampaignId;
use crate::domain::repositories::CampaignRepository;
use crate::error::AppError;

/// Service reporting aggregate campaign performance.
///
/// Purely observational: fetching a snapshot never mutates the campaign, not
/// even its `updated_at` stamp.
pub struct PerformanceService<R: CampaignRepository, M: MetricsSource> {
    repository: Arc<R>,
    metrics: Arc<M>,
}

impl<R: CampaignRepository, M: MetricsSource> PerformanceService<R, M> {
    /// Creates a new performance service.
    pub fn new(repository: Arc<R>, metrics: Arc<M>) -> Self {
        Self {
            repository,
            metrics,
        }
    }

    /// Fetches the current performance snapshot for a campaign.
    ///
    /// A snapshot with more clicks than impressions is passed through as-is
    /// but logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the campaign does not exist (checked
    /// before the source is queried).
    /// Returns [`AppError::Metrics`] if the metrics source fails.
    #[tracing::instrument(skip(self))]
    pub async fn monitor_performance(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<PerformanceSnapshot, AppError> {
        if self.repository.find_by_id(campaign_id).await?.is_none() {
            return Err(AppError::not_found(
                "Campaign not found",
                json!({ "campaign_id": campaign_id }),
            ));
        }

        let snapshot = self.metrics.fetch(campaign_id).await?;

        if !snapshot.is_consistent() {
            tracing::warn!(
                campaign_id = %campaign_id,
                clicks = snapshot.clicks,
                impressions = snapshot.impressions,
                "metrics source reported more clicks than impressions"
            );
        }

        tracing::info!(
            campaign_id = %campaign_id,
            conversion_rate = snapshot.conversion_rate,
            revenue = snapshot.revenue,
            clicks = snapshot.clicks,
            impressions = snapshot.impressions,
            "performance snapshot fetched"
        );

        Ok(snapshot)
    }
}
