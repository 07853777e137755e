//! Product selector implementations.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::collaborators::{ProductSelector, SelectionError};
use crate::domain::entities::{Product, ProductId};

/// A selector that keeps every candidate, in order, with no ranking metadata.
///
/// Used when no ranking backend is wired in; the assignment then mirrors the
/// caller's candidate list exactly.
pub struct PassthroughSelector;

impl PassthroughSelector {
    /// Creates a new PassthroughSelector instance.
    pub fn new() -> Self {
        debug!("Using PassthroughSelector (ranking disabled)");
        Self
    }
}

impl Default for PassthroughSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductSelector for PassthroughSelector {
    async fn select(&self, candidates: &[ProductId]) -> Result<Vec<Product>, SelectionError> {
        Ok(candidates.iter().cloned().map(Product::new).collect())
    }
}
