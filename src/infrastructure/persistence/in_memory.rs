//! In-memory implementation of the campaign repository.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{Campaign, CampaignId, NewCampaign};
use crate::domain::repositories::CampaignRepository;
use crate::error::AppError;

/// Insertion-ordered in-memory campaign store.
///
/// Ids come from a dedicated counter rather than the collection size, so
/// every campaign ever created gets a distinct serial for the lifetime of
/// the store.
///
/// Each repository call is individually atomic behind one `RwLock`; compound
/// service operations assume a single writer.
pub struct InMemoryCampaignRepository {
    campaigns: RwLock<Vec<Campaign>>,
    next_serial: AtomicU64,
}

impl InMemoryCampaignRepository {
    /// Creates an empty store; the first campaign gets `cid_1`.
    pub fn new() -> Self {
        debug!("Using InMemoryCampaignRepository");
        Self {
            campaigns: RwLock::new(Vec::new()),
            next_serial: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryCampaignRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> AppError {
    AppError::internal("Campaign store lock poisoned", json!({}))
}

#[async_trait]
impl CampaignRepository for InMemoryCampaignRepository {
    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign, AppError> {
        let serial = self.next_serial.fetch_add(1, Ordering::Relaxed);
        let campaign = Campaign::new(
            CampaignId::from_serial(serial),
            new_campaign.name,
            new_campaign.platform,
            Utc::now(),
        );

        let mut campaigns = self.campaigns.write().map_err(|_| poisoned())?;
        campaigns.push(campaign.clone());

        Ok(campaign)
    }

    async fn find_by_id(&self, id: &CampaignId) -> Result<Option<Campaign>, AppError> {
        let campaigns = self.campaigns.read().map_err(|_| poisoned())?;
        Ok(campaigns.iter().find(|c| &c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Campaign>, AppError> {
        let campaigns = self.campaigns.read().map_err(|_| poisoned())?;
        Ok(campaigns.clone())
    }

    async fn update(&self, campaign: &Campaign) -> Result<(), AppError> {
        let mut campaigns = self.campaigns.write().map_err(|_| poisoned())?;

        match campaigns.iter_mut().find(|c| c.id == campaign.id) {
            Some(stored) => {
                *stored = campaign.clone();
                Ok(())
            }
            None => Err(AppError::not_found(
                "Campaign not found",
                json!({ "campaign_id": &campaign.id }),
            )),
        }
    }
}
