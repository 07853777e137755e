//! Collaborator contract for product selection.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Product, ProductId};

/// Errors surfaced by product-selection backends.
///
/// The registry treats these as opaque: a failure aborts the assignment
/// without retry, fallback, or partial mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The selection backend could not be reached.
    #[error("product selection backend unavailable: {message}")]
    Unavailable { message: String },
    /// The backend answered but could not produce a selection.
    #[error("product selection failed: {message}")]
    Failed { message: String },
}

impl SelectionError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Ranks and filters candidate products into the subset a campaign should
/// carry.
///
/// The ranking policy (historical performance, margin, stock, ...) is the
/// implementation's business; the registry only consumes the ordered output
/// and attaches it verbatim.
///
/// # Implementations
///
/// - [`crate::infrastructure::selection::PassthroughSelector`] - identity selection
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductSelector: Send + Sync {
    /// Selects the products to attach, in ranking order.
    ///
    /// May return fewer products than candidates (filtering) and may be
    /// called with an empty candidate list.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] when the backend fails; the registry
    /// propagates it unchanged.
    async fn select(&self, candidates: &[ProductId]) -> Result<Vec<Product>, SelectionError>;
}
