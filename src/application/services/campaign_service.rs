//! Campaign creation, product assignment and tracking link service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::config::PlatformCatalog;
use crate::domain::collaborators::ProductSelector;
use crate::domain::entities::{Campaign, CampaignId, LinkRetention, NewCampaign, ProductId};
use crate::domain::repositories::CampaignRepository;
use crate::error::AppError;

/// Service owning all campaign writes: creation, assignment replacement and
/// tracking link generation.
///
/// Writes validate against a working copy of the aggregate first and only
/// then hit the repository, so a failing operation leaves the stored
/// campaign untouched.
pub struct CampaignService<R: CampaignRepository, S: ProductSelector> {
    repository: Arc<R>,
    selector: Arc<S>,
    platforms: PlatformCatalog,
    link_retention: LinkRetention,
}

impl<R: CampaignRepository, S: ProductSelector> CampaignService<R, S> {
    /// Creates a new campaign service.
    pub fn new(
        repository: Arc<R>,
        selector: Arc<S>,
        platforms: PlatformCatalog,
        link_retention: LinkRetention,
    ) -> Self {
        Self {
            repository,
            selector,
            platforms,
            link_retention,
        }
    }

    /// Registers a new campaign.
    ///
    /// The repository issues the id; the campaign starts active with no
    /// products and no links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name or platform label is
    /// blank or over length.
    #[tracing::instrument(skip(self))]
    pub async fn create_campaign(&self, new_campaign: NewCampaign) -> Result<Campaign, AppError> {
        new_campaign.validate().map_err(|e| {
            AppError::validation(
                "Invalid campaign data",
                serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
            )
        })?;

        let campaign = self.repository.create(new_campaign).await?;

        tracing::info!(
            campaign_id = %campaign.id,
            name = %campaign.name,
            platform = %campaign.platform,
            "campaign created"
        );

        Ok(campaign)
    }

    /// Replaces a campaign's product assignment with the selector's pick
    /// from `candidates`.
    ///
    /// Full overwrite: nothing of the previous assignment survives in the
    /// product list. Stored tracking links whose product dropped out follow
    /// the configured retention policy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the campaign does not exist (checked
    /// before the selector runs).
    /// Returns [`AppError::Selector`] if the selector fails; the stored
    /// campaign is left untouched.
    #[tracing::instrument(skip(self))]
    pub async fn assign_products(
        &self,
        campaign_id: &CampaignId,
        candidates: Vec<ProductId>,
    ) -> Result<(), AppError> {
        let mut campaign = self.get_campaign(campaign_id).await?;

        let selected = self.selector.select(&candidates).await?;

        tracing::info!(
            campaign_id = %campaign.id,
            candidates = candidates.len(),
            selected = selected.len(),
            "product assignment replaced"
        );

        campaign.replace_products(selected, self.link_retention, Utc::now());
        self.repository.update(&campaign).await
    }

    /// Mints a tracking link for an assigned product and stores it on the
    /// campaign.
    ///
    /// The link is `<platform base URL>/<product-id>_<ordinal>` with a
    /// campaign-wide ordinal. Minting again for an already linked product
    /// overwrites the stored entry with a fresh ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown campaign and
    /// [`AppError::NotAssigned`] when the product is not part of the current
    /// assignment, both before any mutation.
    #[tracing::instrument(skip(self))]
    pub async fn generate_tracking_link(
        &self,
        campaign_id: &CampaignId,
        product_id: &ProductId,
    ) -> Result<String, AppError> {
        let mut campaign = self.get_campaign(campaign_id).await?;

        let base_url = self.platforms.base_url(&campaign.platform);
        let link = campaign.mint_tracking_link(product_id, &base_url, Utc::now())?;
        self.repository.update(&campaign).await?;

        tracing::info!(
            campaign_id = %campaign.id,
            product_id = %product_id,
            link = %link,
            "tracking link generated"
        );

        Ok(link)
    }

    /// Retrieves a campaign by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no campaign matches the id.
    #[tracing::instrument(skip(self))]
    pub async fn get_campaign(&self, campaign_id: &CampaignId) -> Result<Campaign, AppError> {
        self.repository
            .find_by_id(campaign_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Campaign not found",
                    json!({ "campaign_id": campaign_id }),
                )
            })
    }

    /// Lists all campaigns in creation order.
    #[tracing::instrument(skip(self))]
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, AppError> {
        self.repository.list().await
    }
}
