//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for campaign storage and the collaborator
//! contracts.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory campaign store
//! - [`selection`] - Product selector implementations
//! - [`metrics`] - Metrics source implementations

pub mod metrics;
pub mod persistence;
pub mod selection;
