//! In-memory license and order repository behavior

use digistore_domain::entities::{License, Order};
use digistore_domain::id::new_id;
use digistore_domain::ports::{LicenseRepository, OrderRepository};
use digistore_providers::{InMemoryLicenseRepository, InMemoryOrderRepository};

#[tokio::test]
async fn licenses_are_scoped_by_product_and_sku() {
    let repo = InMemoryLicenseRepository::new();
    repo.create(License::new("p1", "s1", "KEY-1")).await.unwrap();
    repo.create(License::new("p1", "s1", "KEY-2")).await.unwrap();
    repo.create(License::new("p1", "s2", "KEY-3")).await.unwrap();
    // Same SKU id under a different product must not be touched
    repo.create(License::new("p2", "s1", "KEY-4")).await.unwrap();

    let found = repo.find_by_product_and_sku("p1", "s1").await.unwrap();
    assert_eq!(found.len(), 2);

    let deleted = repo.delete_by_product_and_sku("p1", "s1").await.unwrap();
    assert_eq!(deleted, 2);
    assert!(repo.find_by_product_and_sku("p1", "s1").await.unwrap().is_empty());
    assert_eq!(repo.find_by_product_and_sku("p2", "s1").await.unwrap().len(), 1);
    assert_eq!(repo.find_by_product_and_sku("p1", "s2").await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_absent_license_is_a_noop() {
    let repo = InMemoryLicenseRepository::new();
    assert_eq!(repo.delete_by_id("missing").await.unwrap(), 0);
}

#[tokio::test]
async fn update_key_targets_the_license_id_only() {
    let repo = InMemoryLicenseRepository::new();
    let license = repo.create(License::new("p1", "s1", "OLD")).await.unwrap();

    let updated = repo.update_key(&license.id, "NEW").await.unwrap().unwrap();
    assert_eq!(updated.license_key, "NEW");
    assert_eq!(updated.product_id, "p1");

    assert!(repo.update_key(&new_id(), "NEW").await.unwrap().is_none());
}

#[tokio::test]
async fn orders_are_found_by_customer_and_product() {
    let repo = InMemoryOrderRepository::new();
    repo.record(Order {
        id: new_id(),
        customer_id: "c1".to_string(),
        product_id: "p1".to_string(),
        created_at: chrono::Utc::now(),
    });

    assert!(repo
        .find_by_customer_and_product("c1", "p1")
        .await
        .unwrap()
        .is_some());
    assert!(repo
        .find_by_customer_and_product("c1", "p2")
        .await
        .unwrap()
        .is_none());
    assert!(repo
        .find_by_customer_and_product("c2", "p1")
        .await
        .unwrap()
        .is_none());
}
