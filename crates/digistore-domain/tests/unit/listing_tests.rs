//! Listing payload serialization tests
//!
//! Homepage mode must serialize as a bare group array with no `metadata`
//! key; search mode carries `products` plus `metadata`.

use digistore_domain::entities::Product;
use digistore_domain::value_objects::{
    ApiResponse, CategoryGroup, PageLinks, PageMetadata, ProductListing,
};

fn sample_product(name: &str, category: &str) -> Product {
    Product::new(name, "desc", category)
}

fn sample_links() -> PageLinks {
    PageLinks {
        first: "/products?limit=10".to_string(),
        previous: None,
        current: "/products?limit=10&skip=0".to_string(),
        next: Some("/products?limit=10&skip=10".to_string()),
        last: "/products?limit=10&skip=20".to_string(),
    }
}

#[test]
fn homepage_payload_has_no_metadata_field() {
    let listing = ProductListing::Grouped(vec![CategoryGroup {
        category: "tools".to_string(),
        products: vec![sample_product("Editor Pro", "tools")],
    }]);
    let envelope = ApiResponse::ok("Products fetched successfully", listing);

    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["success"], true);
    let result = &json["result"];
    assert!(result.is_array(), "grouped payload must be a bare array");
    assert!(result[0].get("metadata").is_none());
    assert_eq!(result[0]["category"], "tools");
}

#[test]
fn search_payload_carries_products_and_metadata() {
    let listing = ProductListing::Page {
        products: vec![sample_product("Editor Pro", "tools")],
        metadata: PageMetadata {
            skip: 0,
            limit: Some(10),
            total: 21,
            pages: 3,
            links: sample_links(),
        },
    };

    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["metadata"]["total"], 21);
    assert_eq!(json["metadata"]["pages"], 3);
    assert_eq!(json["metadata"]["links"]["self"], "/products?limit=10&skip=0");
    assert!(json["products"].is_array());
}

#[test]
fn envelope_round_trips_through_json() {
    let envelope: ApiResponse<Vec<String>> =
        ApiResponse::ok("ok", vec!["a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&envelope).unwrap();
    let back: ApiResponse<Vec<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, envelope);
}
