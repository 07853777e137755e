//! Campaign aggregate: the central entity of the registry.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{Product, ProductId};
use crate::error::AppError;
use crate::utils::link_builder::build_tracking_link;

/// Matches any non-whitespace character; blank labels fail validation.
static NON_BLANK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S").unwrap());

/// Identifier of a campaign, issued by the repository at creation time.
///
/// Ids follow the dense `cid_<n>` scheme and are never reused: the serial
/// comes from a counter owned by the store, independent of how many
/// campaigns it currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds the id for the `serial`-th campaign ever issued.
    pub fn from_serial(serial: u64) -> Self {
        Self(format!("cid_{serial}"))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for CampaignId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for CampaignId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CampaignId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Lifecycle state of a campaign.
///
/// Registry operations only ever produce [`CampaignStatus::Active`]; the
/// remaining states exist for stored snapshots and future transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

/// Policy applied to tracking links whose product drops out of a reassignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkRetention {
    /// Keep stale link entries for audit.
    #[default]
    Retain,
    /// Cascade-remove links for products no longer assigned.
    Prune,
}

impl FromStr for LinkRetention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(Self::Retain),
            "prune" => Ok(Self::Prune),
            other => Err(format!(
                "unknown link retention policy '{other}' (expected 'retain' or 'prune')"
            )),
        }
    }
}

/// Input data for creating a new campaign.
///
/// Labels must contain at least one non-whitespace character; the registry
/// rejects blank names and platforms before touching the store.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCampaign {
    #[validate(length(min = 1, max = 120))]
    #[validate(regex(path = "*NON_BLANK_RE", message = "must not be blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 60))]
    #[validate(regex(path = "*NON_BLANK_RE", message = "must not be blank"))]
    pub platform: String,
}

impl NewCampaign {
    pub fn new(name: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platform: platform.into(),
        }
    }
}

/// A tracked marketing effort on one platform, owning its assigned products
/// and their tracking links.
///
/// The aggregate enforces the ordering invariant between assignment and link
/// generation: a link can only be minted for a currently assigned product,
/// and ordinals count links campaign-wide, not per product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub platform: String,
    pub status: CampaignStatus,
    pub products: Vec<Product>,
    pub tracking_links: HashMap<ProductId, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Creates an active campaign with no products and no links.
    pub fn new(
        id: CampaignId,
        name: String,
        platform: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            platform,
            status: CampaignStatus::Active,
            products: Vec::new(),
            tracking_links: HashMap::new(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns true if the product is part of the current assignment.
    pub fn is_assigned(&self, product_id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == product_id)
    }

    /// Looks up an assigned product record.
    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == product_id)
    }

    /// Returns the stored tracking link for a product, if one was generated.
    pub fn tracking_link(&self, product_id: &ProductId) -> Option<&str> {
        self.tracking_links.get(product_id).map(String::as_str)
    }

    /// Number of tracking links currently stored.
    pub fn link_count(&self) -> usize {
        self.tracking_links.len()
    }

    /// Replaces the entire product assignment with the selector's output.
    ///
    /// This is a set operation, not a merge: nothing of the prior assignment
    /// survives in `products`. Links belonging to products that dropped out
    /// are kept or removed according to `retention`.
    pub fn replace_products(
        &mut self,
        products: Vec<Product>,
        retention: LinkRetention,
        now: DateTime<Utc>,
    ) {
        if retention == LinkRetention::Prune {
            self.tracking_links
                .retain(|product_id, _| products.iter().any(|p| &p.id == product_id));
        }
        self.products = products;
        self.updated_at = now;
    }

    /// Mints the next tracking link for an assigned product.
    ///
    /// The ordinal is campaign-scoped: `1 + <current link count>`, regardless
    /// of which product receives the link. Minting again for an already
    /// linked product overwrites the stored entry with a fresh ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAssigned`] (without mutating anything) when the
    /// product is not part of the current assignment.
    pub fn mint_tracking_link(
        &mut self,
        product_id: &ProductId,
        base_url: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        if !self.is_assigned(product_id) {
            return Err(AppError::not_assigned(
                "Product is not assigned to this campaign",
                json!({ "campaign_id": &self.id, "product_id": product_id }),
            ));
        }

        let ordinal = self.tracking_links.len() + 1;
        let link = build_tracking_link(base_url, product_id, ordinal);
        self.tracking_links.insert(product_id.clone(), link.clone());
        self.updated_at = now;

        Ok(link)
    }
}
