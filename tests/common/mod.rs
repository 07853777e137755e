#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use campaign_tracker::application::services::{CampaignService, PerformanceService};
use campaign_tracker::config::PlatformCatalog;
use campaign_tracker::domain::collaborators::{
    MetricsError, MetricsSource, PerformanceSnapshot, ProductSelector, SelectionError,
};
use campaign_tracker::domain::entities::{CampaignId, LinkRetention, Product, ProductId};
use campaign_tracker::infrastructure::metrics::StaticMetricsSource;
use campaign_tracker::infrastructure::persistence::InMemoryCampaignRepository;
use campaign_tracker::infrastructure::selection::PassthroughSelector;

/// Initializes test log output; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

pub fn product_ids(ids: &[&str]) -> Vec<ProductId> {
    ids.iter().map(|id| ProductId::from(*id)).collect()
}

pub fn campaign_service<S: ProductSelector>(
    repository: Arc<InMemoryCampaignRepository>,
    selector: S,
    retention: LinkRetention,
) -> CampaignService<InMemoryCampaignRepository, S> {
    CampaignService::new(
        repository,
        Arc::new(selector),
        PlatformCatalog::default(),
        retention,
    )
}

/// Service wired with real in-memory implementations and a selector that
/// keeps every candidate.
pub fn passthrough_service(
    repository: Arc<InMemoryCampaignRepository>,
) -> CampaignService<InMemoryCampaignRepository, PassthroughSelector> {
    campaign_service(repository, PassthroughSelector::new(), LinkRetention::Retain)
}

pub fn performance_service(
    repository: Arc<InMemoryCampaignRepository>,
) -> PerformanceService<InMemoryCampaignRepository, StaticMetricsSource> {
    PerformanceService::new(repository, Arc::new(StaticMetricsSource::default()))
}

/// Selector that keeps only candidates present in its allowlist, preserving
/// candidate order.
pub struct AllowlistSelector {
    allowed: Vec<ProductId>,
}

impl AllowlistSelector {
    pub fn new(allowed: &[&str]) -> Self {
        Self {
            allowed: product_ids(allowed),
        }
    }
}

#[async_trait]
impl ProductSelector for AllowlistSelector {
    async fn select(&self, candidates: &[ProductId]) -> Result<Vec<Product>, SelectionError> {
        Ok(candidates
            .iter()
            .filter(|id| self.allowed.contains(*id))
            .cloned()
            .map(Product::new)
            .collect())
    }
}

/// Selector that always fails, for error-path tests.
pub struct FailingSelector;

#[async_trait]
impl ProductSelector for FailingSelector {
    async fn select(&self, _candidates: &[ProductId]) -> Result<Vec<Product>, SelectionError> {
        Err(SelectionError::unavailable("ranking backend down"))
    }
}

/// Metrics source that always fails, for error-path tests.
pub struct FailingMetrics;

#[async_trait]
impl MetricsSource for FailingMetrics {
    async fn fetch(
        &self,
        _campaign_id: &CampaignId,
    ) -> Result<PerformanceSnapshot, MetricsError> {
        Err(MetricsError::unavailable("analytics API down"))
    }
}
