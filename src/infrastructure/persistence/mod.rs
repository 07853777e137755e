//! Campaign store implementations.
//!
//! # Repositories
//!
//! - [`InMemoryCampaignRepository`] - Insertion-ordered in-memory store

pub mod in_memory;

pub use in_memory::InMemoryCampaignRepository;
