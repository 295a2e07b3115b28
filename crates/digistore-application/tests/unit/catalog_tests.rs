//! Product CRUD and listing tests

use digistore_domain::entities::Product;
use digistore_domain::error::Error;
use digistore_domain::ports::ProductRepository;
use digistore_domain::value_objects::{
    CreateProductInput, ProductListing, ProductPatch, ProductQuery,
};

use crate::support::Harness;

#[tokio::test]
async fn create_mints_ledger_record_when_none_supplied() {
    let h = Harness::new();

    let product = h.create_product("Editor Pro", "tools").await;

    assert!(
        product
            .stripe_product_id
            .as_deref()
            .is_some_and(|id| id.starts_with("prod_test_"))
    );
    assert!(!product.ledger_sync_pending);
    assert_eq!(h.ledger.calls(), vec!["create_product:Editor Pro"]);
}

#[tokio::test]
async fn create_keeps_supplied_ledger_reference() {
    let h = Harness::new();

    let response = h
        .service
        .create_product(CreateProductInput {
            product_name: "Imported".to_string(),
            description: "Pre-mirrored product".to_string(),
            category: "tools".to_string(),
            stripe_product_id: Some("prod_existing".to_string()),
        })
        .await
        .expect("create should succeed");
    let product = response.result.expect("created product");

    assert_eq!(product.stripe_product_id.as_deref(), Some("prod_existing"));
    // No ledger traffic at all
    assert!(h.ledger.calls().is_empty());
}

#[tokio::test]
async fn listing_defaults_to_first_page_of_ten() {
    let h = Harness::new();
    for i in 0..12 {
        h.create_product(&format!("Widget {i}"), "tools").await;
    }

    let response = h
        .service
        .find_products(ProductQuery::default())
        .await
        .expect("listing should succeed");

    match response.result.expect("listing payload") {
        ProductListing::Page { products, metadata } => {
            assert_eq!(products.len(), 10);
            assert_eq!(metadata.skip, 0);
            assert_eq!(metadata.limit, Some(10));
            assert_eq!(metadata.total, 12);
            assert_eq!(metadata.pages, 2);
            assert!(metadata.links.previous.is_none());
            assert!(metadata.links.next.is_some());
        }
        ProductListing::Grouped(_) => panic!("search mode must return a page"),
    }
}

#[tokio::test]
async fn listing_filters_by_category_and_search() {
    let h = Harness::new();
    h.create_product("Editor Pro", "tools").await;
    h.create_product("Editor Lite", "tools").await;
    h.create_product("Synth One", "audio").await;

    let response = h
        .service
        .find_products(ProductQuery {
            category: Some("tools".to_string()),
            search: Some("pro".to_string()),
            ..ProductQuery::default()
        })
        .await
        .expect("listing should succeed");

    match response.result.expect("listing payload") {
        ProductListing::Page { products, metadata } => {
            assert_eq!(products.len(), 1);
            assert_eq!(products[0].product_name, "Editor Pro");
            assert_eq!(metadata.total, 1);
        }
        ProductListing::Grouped(_) => panic!("search mode must return a page"),
    }
}

#[tokio::test]
async fn homepage_mode_groups_by_category_capped_at_four() {
    let h = Harness::new();
    for i in 0..6 {
        h.create_product(&format!("Tool {i}"), "tools").await;
    }
    h.create_product("Synth One", "audio").await;

    let response = h
        .service
        .find_products(ProductQuery {
            homepage: true,
            ..ProductQuery::default()
        })
        .await
        .expect("listing should succeed");

    match response.result.expect("listing payload") {
        ProductListing::Grouped(groups) => {
            assert_eq!(groups.len(), 2);
            for group in &groups {
                assert!(group.products.len() <= 4);
            }
            let tools = groups
                .iter()
                .find(|g| g.category == "tools")
                .expect("tools group");
            assert_eq!(tools.products.len(), 4);
        }
        ProductListing::Page { .. } => panic!("homepage mode must return groups"),
    }
}

#[tokio::test]
async fn detail_lists_same_category_siblings_excluding_self() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;
    let sibling = h.create_product("Editor Lite", "tools").await;
    h.create_product("Synth One", "audio").await;

    let response = h
        .service
        .find_product(&product.id)
        .await
        .expect("lookup should succeed");
    let detail = response.result.expect("product detail");

    assert_eq!(detail.product.id, product.id);
    assert_eq!(detail.related_products.len(), 1);
    assert_eq!(detail.related_products[0].id, sibling.id);
}

#[tokio::test]
async fn lookup_of_missing_product_is_not_found() {
    let h = Harness::new();

    let err = h
        .service
        .find_product("missing-id")
        .await
        .expect_err("missing product must fail");
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn update_pushes_name_and_description_to_ledger() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;
    let ledger_id = product.stripe_product_id.clone().expect("ledger id");

    let response = h
        .service
        .update_product(
            &product.id,
            ProductPatch {
                product_name: Some("Editor Pro Max".to_string()),
                ..ProductPatch::default()
            },
        )
        .await
        .expect("update should succeed");
    let updated = response.result.expect("updated product");

    assert_eq!(updated.product_name, "Editor Pro Max");
    assert!(!updated.ledger_sync_pending);
    assert!(
        h.ledger
            .calls()
            .contains(&format!("update_product:{ledger_id}"))
    );
}

#[tokio::test]
async fn explicit_ledger_reference_suppresses_the_push() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;

    h.service
        .update_product(
            &product.id,
            ProductPatch {
                stripe_product_id: Some("prod_replacement".to_string()),
                ..ProductPatch::default()
            },
        )
        .await
        .expect("update should succeed");

    let pushes: Vec<_> = h
        .ledger
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("update_product:"))
        .collect();
    assert!(pushes.is_empty());
}

#[tokio::test]
async fn ledger_failure_after_local_update_marks_product_pending() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;

    h.ledger
        .fail_update
        .store(true, std::sync::atomic::Ordering::SeqCst);
    let err = h
        .service
        .update_product(
            &product.id,
            ProductPatch {
                description: Some("Updated locally".to_string()),
                ..ProductPatch::default()
            },
        )
        .await
        .expect_err("ledger outage must surface");
    assert!(matches!(err, Error::PaymentLedger { .. }));

    // The local write committed and the product is flagged
    let stored = stored_product(&h, &product.id).await;
    assert_eq!(stored.description, "Updated locally");
    assert!(stored.ledger_sync_pending);

    // The next successful sync clears the flag
    h.ledger
        .fail_update
        .store(false, std::sync::atomic::Ordering::SeqCst);
    let response = h
        .service
        .update_product(
            &product.id,
            ProductPatch {
                description: Some("Updated again".to_string()),
                ..ProductPatch::default()
            },
        )
        .await
        .expect("update should succeed");
    assert!(!response.result.expect("updated product").ledger_sync_pending);
}

#[tokio::test]
async fn delete_removes_local_record_then_ledger_mirror() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;
    let ledger_id = product.stripe_product_id.clone().expect("ledger id");

    let response = h
        .service
        .delete_product(&product.id)
        .await
        .expect("delete should succeed");
    assert_eq!(response.result.expect("deleted product").id, product.id);

    assert!(
        h.ledger
            .calls()
            .contains(&format!("delete_product:{ledger_id}"))
    );
    let err = h
        .service
        .find_product(&product.id)
        .await
        .expect_err("deleted product must be gone");
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn delete_of_missing_product_is_not_found() {
    let h = Harness::new();

    let err = h
        .service
        .delete_product("missing-id")
        .await
        .expect_err("missing product must fail");
    assert!(matches!(err, Error::NotFound { .. }));
}

async fn stored_product(h: &Harness, id: &str) -> Product {
    h.products
        .find_one(id)
        .await
        .expect("store lookup")
        .expect("product present")
}
