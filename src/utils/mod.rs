//! Utility functions shared across the registry.
//!
//! - [`link_builder`] - Tracking link construction

pub mod link_builder;
