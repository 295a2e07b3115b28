//! SKU lifecycle tests

use digistore_domain::constants::MINOR_UNITS_PER_MAJOR;
use digistore_domain::entities::Product;
use digistore_domain::error::Error;
use digistore_domain::ports::{LicenseRepository, ProductRepository};
use digistore_domain::value_objects::{SkuInput, SkuPatch};

use crate::support::Harness;

fn sku_input(price: u64, lifetime: bool) -> SkuInput {
    SkuInput {
        price,
        lifetime,
        stripe_price_id: None,
    }
}

#[tokio::test]
async fn batch_shares_one_sku_code() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;

    let response = h
        .service
        .add_product_skus(&product.id, vec![sku_input(49, false), sku_input(99, true)])
        .await
        .expect("batch should succeed");
    let updated = response.result.expect("updated product");

    assert_eq!(updated.skus.len(), 2);
    let code = &updated.skus[0].sku_code;
    assert_eq!(code.len(), 12);
    assert_eq!(code, &updated.skus[1].sku_code);
    assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[tokio::test]
async fn entries_without_reference_get_a_minted_price() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;

    let response = h
        .service
        .add_product_skus(
            &product.id,
            vec![
                sku_input(49, false),
                SkuInput {
                    price: 99,
                    lifetime: true,
                    stripe_price_id: Some("price_preexisting".to_string()),
                },
            ],
        )
        .await
        .expect("batch should succeed");
    let updated = response.result.expect("updated product");

    // Exactly one mint, for the entry lacking a reference
    let mints: Vec<_> = h
        .ledger
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("create_price:"))
        .collect();
    assert_eq!(mints.len(), 1);

    assert!(
        updated.skus[0]
            .stripe_price_id
            .as_deref()
            .is_some_and(|id| id.starts_with("price_test_"))
    );
    assert_eq!(
        updated.skus[1].stripe_price_id.as_deref(),
        Some("price_preexisting")
    );
    // The pre-mirrored entry still gets the batch code
    assert_eq!(updated.skus[1].sku_code, updated.skus[0].sku_code);
}

#[tokio::test]
async fn minted_price_carries_amount_currency_and_metadata() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;

    let response = h
        .service
        .add_product_skus(&product.id, vec![sku_input(49, true)])
        .await
        .expect("batch should succeed");
    let updated = response.result.expect("updated product");
    let sku = &updated.skus[0];

    let specs = h.ledger.price_specs.lock().unwrap();
    assert_eq!(specs.len(), 1);
    let spec = &specs[0];

    assert_eq!(
        spec.ledger_product_id,
        product.stripe_product_id.clone().expect("ledger id")
    );
    assert_eq!(spec.unit_amount_minor, 49 * MINOR_UNITS_PER_MAJOR);
    assert_eq!(spec.currency, "usd");
    assert_eq!(spec.metadata.get("skuId"), Some(&sku.id));
    assert_eq!(spec.metadata.get("skuCode"), Some(&sku.sku_code));
    assert_eq!(spec.metadata.get("productId"), Some(&product.id));
    assert_eq!(spec.metadata.get("price"), Some(&"49".to_string()));
    assert_eq!(spec.metadata.get("lifetime"), Some(&"true".to_string()));
    assert_eq!(
        spec.metadata.get("productName"),
        Some(&"Editor Pro".to_string())
    );
}

#[tokio::test]
async fn batch_for_missing_product_is_not_found() {
    let h = Harness::new();

    let err = h
        .service
        .add_product_skus("missing-id", vec![sku_input(49, false)])
        .await
        .expect_err("missing product must fail");
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn minting_requires_a_ledger_product_record() {
    let h = Harness::new();
    // Seed a product directly with no ledger mirror
    let orphan = h
        .products
        .create(Product::new("Orphan", "No ledger record", "tools"))
        .await
        .expect("seed product");

    let err = h
        .service
        .add_product_skus(&orphan.id, vec![sku_input(49, false)])
        .await
        .expect_err("minting without a ledger record must fail");
    assert!(matches!(err, Error::Validation { .. }));
}

#[tokio::test]
async fn price_change_mints_replacement_and_leaves_old_active() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;
    let product = h
        .service
        .add_product_skus(&product.id, vec![sku_input(49, false)])
        .await
        .expect("batch should succeed")
        .result
        .expect("updated product");
    let sku = product.skus[0].clone();
    let old_price_id = sku.stripe_price_id.clone().expect("minted price");

    let response = h
        .service
        .update_product_sku(
            &product.id,
            &sku.id,
            SkuPatch {
                price: Some(79),
                ..SkuPatch::default()
            },
        )
        .await
        .expect("update should succeed");
    let updated = response.result.expect("updated product");
    let updated_sku = updated.sku(&sku.id).expect("sku still embedded");

    assert_eq!(updated_sku.price, 79);
    let new_price_id = updated_sku.stripe_price_id.clone().expect("new price");
    assert_ne!(new_price_id, old_price_id);
    // Replacement is append-only, the superseded price is not deactivated
    assert!(
        !h.ledger
            .calls()
            .iter()
            .any(|c| c.starts_with("deactivate_price:"))
    );
    // Code survives the price change
    assert_eq!(updated_sku.sku_code, sku.sku_code);
}

#[tokio::test]
async fn unchanged_price_does_not_mint() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;
    let product = h
        .service
        .add_product_skus(&product.id, vec![sku_input(49, false)])
        .await
        .expect("batch should succeed")
        .result
        .expect("updated product");
    let sku = product.skus[0].clone();
    let mints_before = h
        .ledger
        .calls()
        .iter()
        .filter(|c| c.starts_with("create_price:"))
        .count();

    let response = h
        .service
        .update_product_sku(
            &product.id,
            &sku.id,
            SkuPatch {
                price: Some(49),
                lifetime: Some(true),
                ..SkuPatch::default()
            },
        )
        .await
        .expect("update should succeed");
    let updated = response.result.expect("updated product");
    let updated_sku = updated.sku(&sku.id).expect("sku still embedded");

    assert!(updated_sku.lifetime);
    assert_eq!(updated_sku.stripe_price_id, sku.stripe_price_id);
    let mints_after = h
        .ledger
        .calls()
        .iter()
        .filter(|c| c.starts_with("create_price:"))
        .count();
    assert_eq!(mints_after, mints_before);
}

#[tokio::test]
async fn delete_deactivates_price_and_cascades_scoped_licenses() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;
    let product = h
        .service
        .add_product_skus(&product.id, vec![sku_input(49, false), sku_input(99, true)])
        .await
        .expect("batch should succeed")
        .result
        .expect("updated product");
    let doomed = product.skus[0].clone();
    let survivor = product.skus[1].clone();
    let doomed_price = doomed.stripe_price_id.clone().expect("minted price");

    h.service
        .add_product_sku_license(&product.id, &doomed.id, "KEY-DOOMED-1")
        .await
        .expect("license add");
    h.service
        .add_product_sku_license(&product.id, &survivor.id, "KEY-SURVIVOR-1")
        .await
        .expect("license add");

    let response = h
        .service
        .delete_product_sku(&product.id, &doomed.id)
        .await
        .expect("delete should succeed");
    let updated = response.result.expect("updated product");

    assert_eq!(updated.skus.len(), 1);
    assert_eq!(updated.skus[0].id, survivor.id);
    assert!(
        h.ledger
            .calls()
            .contains(&format!("deactivate_price:{doomed_price}"))
    );

    // Cascade is scoped: the doomed SKU's keys are gone, the sibling's remain
    let doomed_keys = h
        .licenses
        .find_by_product_and_sku(&product.id, &doomed.id)
        .await
        .expect("license lookup");
    assert!(doomed_keys.is_empty());
    let survivor_keys = h
        .licenses
        .find_by_product_and_sku(&product.id, &survivor.id)
        .await
        .expect("license lookup");
    assert_eq!(survivor_keys.len(), 1);
}

#[tokio::test]
async fn delete_of_missing_sku_is_not_found() {
    let h = Harness::new();
    let product = h.create_product("Editor Pro", "tools").await;

    let err = h
        .service
        .delete_product_sku(&product.id, "missing-sku")
        .await
        .expect_err("missing sku must fail");
    assert!(matches!(err, Error::NotFound { .. }));
}
