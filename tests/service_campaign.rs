mod common;

use std::sync::Arc;

use campaign_tracker::domain::entities::{CampaignId, LinkRetention, NewCampaign, ProductId};
use campaign_tracker::error::AppError;
use campaign_tracker::infrastructure::persistence::InMemoryCampaignRepository;
use campaign_tracker::infrastructure::selection::PassthroughSelector;

use common::{AllowlistSelector, FailingSelector};

#[tokio::test]
async fn test_campaign_lifecycle_end_to_end() {
    common::init_tracing();
    let repository = Arc::new(InMemoryCampaignRepository::new());
    let service = common::campaign_service(
        repository,
        AllowlistSelector::new(&["p1", "p3"]),
        LinkRetention::Retain,
    );

    let campaign = service
        .create_campaign(NewCampaign::new("Summer Sale", "Facebook"))
        .await
        .unwrap();
    assert_eq!(campaign.id.as_str(), "cid_1");
    assert!(campaign.products.is_empty());

    service
        .assign_products(&campaign.id, common::product_ids(&["p1", "p2", "p3"]))
        .await
        .unwrap();

    let assigned = service.get_campaign(&campaign.id).await.unwrap();
    let ids: Vec<&str> = assigned.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p3"]);

    let first = service
        .generate_tracking_link(&campaign.id, &ProductId::from("p1"))
        .await
        .unwrap();
    assert_eq!(first, "https://track.fb.test/p1_1");

    let second = service
        .generate_tracking_link(&campaign.id, &ProductId::from("p3"))
        .await
        .unwrap();
    assert_eq!(second, "https://track.fb.test/p3_2");

    let rejected = service
        .generate_tracking_link(&campaign.id, &ProductId::from("p2"))
        .await;
    assert!(matches!(rejected.unwrap_err(), AppError::NotAssigned { .. }));

    let stored = service.get_campaign(&campaign.id).await.unwrap();
    assert_eq!(stored.link_count(), 2);
    assert_eq!(
        stored.tracking_link(&ProductId::from("p1")),
        Some("https://track.fb.test/p1_1")
    );
}

#[tokio::test]
async fn test_each_campaign_gets_a_distinct_id() {
    let service = common::passthrough_service(Arc::new(InMemoryCampaignRepository::new()));

    let first = service
        .create_campaign(NewCampaign::new("Summer Sale", "Facebook"))
        .await
        .unwrap();
    let second = service
        .create_campaign(NewCampaign::new("Summer Sale", "Facebook"))
        .await
        .unwrap();

    assert_eq!(first.id.as_str(), "cid_1");
    assert_eq!(second.id.as_str(), "cid_2");
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_reassignment_is_full_replacement() {
    let service = common::passthrough_service(Arc::new(InMemoryCampaignRepository::new()));
    let campaign = service
        .create_campaign(NewCampaign::new("Summer Sale", "Facebook"))
        .await
        .unwrap();

    service
        .assign_products(&campaign.id, common::product_ids(&["p1", "p2"]))
        .await
        .unwrap();
    service
        .assign_products(&campaign.id, common::product_ids(&["p3"]))
        .await
        .unwrap();

    let stored = service.get_campaign(&campaign.id).await.unwrap();
    let ids: Vec<&str> = stored.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p3"]);
}

#[tokio::test]
async fn test_empty_assignment_clears_products() {
    let service = common::passthrough_service(Arc::new(InMemoryCampaignRepository::new()));
    let campaign = service
        .create_campaign(NewCampaign::new("Summer Sale", "Facebook"))
        .await
        .unwrap();

    service
        .assign_products(&campaign.id, common::product_ids(&["p1"]))
        .await
        .unwrap();
    service.assign_products(&campaign.id, vec![]).await.unwrap();

    let stored = service.get_campaign(&campaign.id).await.unwrap();
    assert!(stored.products.is_empty());
}

#[tokio::test]
async fn test_retain_keeps_links_for_dropped_products() {
    let service = common::passthrough_service(Arc::new(InMemoryCampaignRepository::new()));
    let campaign = service
        .create_campaign(NewCampaign::new("Summer Sale", "Facebook"))
        .await
        .unwrap();

    service
        .assign_products(&campaign.id, common::product_ids(&["p1"]))
        .await
        .unwrap();
    service
        .generate_tracking_link(&campaign.id, &ProductId::from("p1"))
        .await
        .unwrap();

    service
        .assign_products(&campaign.id, common::product_ids(&["p2"]))
        .await
        .unwrap();

    let stored = service.get_campaign(&campaign.id).await.unwrap();
    assert!(!stored.is_assigned(&ProductId::from("p1")));
    assert_eq!(
        stored.tracking_link(&ProductId::from("p1")),
        Some("https://track.fb.test/p1_1")
    );

    // The stale entry still counts toward the campaign-wide ordinal.
    let link = service
        .generate_tracking_link(&campaign.id, &ProductId::from("p2"))
        .await
        .unwrap();
    assert_eq!(link, "https://track.fb.test/p2_2");
}

#[tokio::test]
async fn test_prune_drops_links_for_dropped_products() {
    let service = common::campaign_service(
        Arc::new(InMemoryCampaignRepository::new()),
        PassthroughSelector::new(),
        LinkRetention::Prune,
    );
    let campaign = service
        .create_campaign(NewCampaign::new("Summer Sale", "Facebook"))
        .await
        .unwrap();

    service
        .assign_products(&campaign.id, common::product_ids(&["p1", "p2"]))
        .await
        .unwrap();
    service
        .generate_tracking_link(&campaign.id, &ProductId::from("p1"))
        .await
        .unwrap();
    service
        .generate_tracking_link(&campaign.id, &ProductId::from("p2"))
        .await
        .unwrap();

    service
        .assign_products(&campaign.id, common::product_ids(&["p2"]))
        .await
        .unwrap();

    let stored = service.get_campaign(&campaign.id).await.unwrap();
    assert!(stored.tracking_link(&ProductId::from("p1")).is_none());
    assert_eq!(
        stored.tracking_link(&ProductId::from("p2")),
        Some("https://track.fb.test/p2_2")
    );
    assert_eq!(stored.link_count(), 1);
}

#[tokio::test]
async fn test_blank_labels_are_rejected() {
    let service = common::passthrough_service(Arc::new(InMemoryCampaignRepository::new()));

    let result = service
        .create_campaign(NewCampaign::new("", "Facebook"))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

    let result = service
        .create_campaign(NewCampaign::new("Summer Sale", "   "))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

    assert!(service.list_campaigns().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_selector_failure_leaves_campaign_untouched() {
    let repository = Arc::new(InMemoryCampaignRepository::new());
    let seeder = common::passthrough_service(repository.clone());

    let campaign = seeder
        .create_campaign(NewCampaign::new("Summer Sale", "Facebook"))
        .await
        .unwrap();
    seeder
        .assign_products(&campaign.id, common::product_ids(&["p1"]))
        .await
        .unwrap();
    let before = seeder.get_campaign(&campaign.id).await.unwrap();

    let failing =
        common::campaign_service(repository.clone(), FailingSelector, LinkRetention::Retain);
    let result = failing
        .assign_products(&campaign.id, common::product_ids(&["p2"]))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Selector(_)));

    let after = seeder.get_campaign(&campaign.id).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_assigning_to_unknown_campaign_fails() {
    let service = common::passthrough_service(Arc::new(InMemoryCampaignRepository::new()));

    let result = service
        .assign_products(&CampaignId::from_serial(1), common::product_ids(&["p1"]))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_regenerated_link_gets_fresh_ordinal() {
    let service = common::passthrough_service(Arc::new(InMemoryCampaignRepository::new()));
    let campaign = service
        .create_campaign(NewCampaign::new("Summer Sale", "Facebook"))
        .await
        .unwrap();
    service
        .assign_products(&campaign.id, common::product_ids(&["p1"]))
        .await
        .unwrap();

    let first = service
        .generate_tracking_link(&campaign.id, &ProductId::from("p1"))
        .await
        .unwrap();
    let second = service
        .generate_tracking_link(&campaign.id, &ProductId::from("p1"))
        .await
        .unwrap();

    assert_eq!(first, "https://track.fb.test/p1_1");
    assert_eq!(second, "https://track.fb.test/p1_2");

    let stored = service.get_campaign(&campaign.id).await.unwrap();
    assert_eq!(stored.link_count(), 1);
    assert_eq!(
        stored.tracking_link(&ProductId::from("p1")),
        Some("https://track.fb.test/p1_2")
    );
}

#[tokio::test]
async fn test_list_campaigns_in_creation_order() {
    let service = common::passthrough_service(Arc::new(InMemoryCampaignRepository::new()));

    for name in ["First", "Second", "Third"] {
        service
            .create_campaign(NewCampaign::new(name, "Google"))
            .await
            .unwrap();
    }

    let campaigns = service.list_campaigns().await.unwrap();
    let names: Vec<&str> = campaigns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}
