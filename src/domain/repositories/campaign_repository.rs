//! Repository trait for campaign storage.

use async_trait::async_trait;

use crate::domain::entities::{Campaign, CampaignId, NewCampaign};
use crate::error::AppError;

/// Storage interface owning the campaign collection.
///
/// The registry's services hold the only reference to an implementation, so
/// every mutation and lookup flows through this trait. Implementations
/// allocate identifiers at creation time and must never reuse one, even if a
/// delete operation is added later: the id counter is theirs to own,
/// independent of how many campaigns the store currently holds.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryCampaignRepository`] - insertion-ordered in-memory store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_campaign.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Stores a new campaign and returns it with its freshly issued id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store faults.
    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign, AppError>;

    /// Finds a campaign by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Campaign))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store faults.
    async fn find_by_id(&self, id: &CampaignId) -> Result<Option<Campaign>, AppError>;

    /// Lists all campaigns in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store faults.
    async fn list(&self) -> Result<Vec<Campaign>, AppError>;

    /// Writes back a mutated campaign aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no campaign with this id exists.
    /// Returns [`AppError::Internal`] on store faults.
    async fn update(&self, campaign: &Campaign) -> Result<(), AppError>;
}
