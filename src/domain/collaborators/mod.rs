//! Collaborator trait definitions for the domain layer.
//!
//! The registry composes with two external systems it calls but does not
//! own: product selection and metrics. Each contract carries its own error
//! enum so failures pass through to callers as typed, opaque collaborator
//! faults instead of being absorbed or retried.
//!
//! # Available Contracts
//!
//! - [`ProductSelector`] - Ranks/filters candidate products for assignment
//! - [`MetricsSource`] - Produces campaign performance snapshots
//!
//! Default implementations live in `crate::infrastructure`; mocks are
//! auto-generated via `mockall` for unit tests.

pub mod metrics_source;
pub mod product_selector;

pub use metrics_source::{MetricsError, MetricsSource, PerformanceSnapshot};
pub use product_selector::{ProductSelector, SelectionError};

#[cfg(test)]
pub use metrics_source::MockMetricsSource;
#[cfg(test)]
pub use product_selector::MockProductSelector;
