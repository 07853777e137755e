//! Crate-wide error type covering every failure a registry operation can surface.

use serde_json::Value;
use thiserror::Error;

use crate::domain::collaborators::{MetricsError, SelectionError};

/// Failure raised by campaign operations.
///
/// Every operation either commits its side effect in full or returns one of
/// these variants without mutating state, so callers may retry freely.
///
/// Collaborator failures ([`SelectionError`], [`MetricsError`]) pass through
/// unchanged behind their own variants; the registry performs no recovery or
/// retry on their behalf.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected input (blank campaign name, malformed platform label, ...).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The referenced campaign does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The referenced product is not currently assigned to the campaign.
    #[error("{message}")]
    NotAssigned { message: String, details: Value },

    /// The product-selection collaborator failed.
    #[error(transparent)]
    Selector(#[from] SelectionError),

    /// The metrics collaborator failed.
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    /// Store-level fault (e.g. a poisoned lock in the in-memory repository).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn not_assigned(message: impl Into<String>, details: Value) -> Self {
        Self::NotAssigned {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable label for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::NotAssigned { .. } => "not_assigned",
            AppError::Selector(_) => "selector_failure",
            AppError::Metrics(_) => "metrics_failure",
            AppError::Internal { .. } => "internal_error",
        }
    }
}
