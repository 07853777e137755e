//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Campaign`] - The aggregate root: lifecycle, assigned products, tracking links
//! - [`Product`] - A selector-chosen product held inside a campaign
//!
//! # Design Pattern
//!
//! Creation inputs are separate structs ([`NewCampaign`]) carrying their own
//! validation rules, while identifiers are newtypes ([`CampaignId`],
//! [`ProductId`]) so the two id spaces cannot be mixed up. Invariants that
//! span fields (assignment before link generation, campaign-scoped ordinals)
//! live as methods on the aggregate itself.

pub mod campaign;
pub mod product;

pub use campaign::{Campaign, CampaignId, CampaignStatus, LinkRetention, NewCampaign};
pub use product::{Product, ProductId};
