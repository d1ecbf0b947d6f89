mod common;

use serde_json::json;

#[tokio::test]
async fn test_keywords_sorted_by_length_then_alphabetically() {
    let server = common::offline_server();

    let response = server
        .post("/api/sem/keywords")
        .json(&json!({
            "seeds": ["shoe"],
            "modifiers": ["buy"],
            "include_common_modifiers": false
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let keywords: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["keyword"].as_str().unwrap())
        .collect();
    assert_eq!(keywords, vec!["shoe", "buy shoe", "shoe buy"]);

    assert_eq!(json["data"][0]["modifier"], serde_json::Value::Null);
    assert_eq!(json["data"][1]["seed"], "shoe");
    assert_eq!(json["data"][1]["modifier"], "buy");
    assert_eq!(json["data"][1]["length"], 8);
    assert_eq!(json["message"], "Generated 3 keywords");
}

#[tokio::test]
async fn test_keywords_include_common_modifiers_by_default() {
    let server = common::offline_server();

    let response = server
        .post("/api/sem/keywords")
        .json(&json!({ "seeds": ["tea"] }))
        .await;

    response.assert_status_ok();

    let data = response.json::<serde_json::Value>()["data"].clone();
    let keywords: Vec<&str> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["keyword"].as_str().unwrap())
        .collect();
    assert!(keywords.contains(&"tea"));
    assert!(keywords.contains(&"buy tea"));
    assert!(keywords.contains(&"tea near me"));
}

#[tokio::test]
async fn test_keywords_capped_at_limit() {
    let server = common::offline_server();

    let seeds: Vec<String> = (0..30).map(|i| format!("seed{i}")).collect();
    let modifiers: Vec<String> = (0..30).map(|i| format!("mod{i}")).collect();

    let response = server
        .post("/api/sem/keywords")
        .json(&json!({ "seeds": seeds, "modifiers": modifiers }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"].as_array().unwrap().len(), 500);
    assert_eq!(json["message"], "Generated 500 keywords");
}

#[tokio::test]
async fn test_keywords_blank_seeds_are_rejected() {
    let server = common::offline_server();

    let response = server
        .post("/api/sem/keywords")
        .json(&json!({ "seeds": ["  ", ""] }))
        .await;
    response.assert_status_bad_request();

    let response = server
        .post("/api/sem/keywords")
        .json(&json!({ "seeds": [] }))
        .await;
    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["success"], false);
}

#[tokio::test]
async fn test_ads_renders_variants() {
    let server = common::offline_server();

    let response = server
        .post("/api/sem/ads")
        .json(&json!({
            "product_name": "  Widgets ",
            "template": "Best {product} deal",
            "max_length": 30
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let variants = json["data"].as_array().unwrap();
    assert!(!variants.is_empty());
    assert!(variants.len() <= 20);

    let custom = variants
        .iter()
        .find(|v| v["headline"] == "Best Widgets deal")
        .unwrap();
    assert_eq!(custom["length"], 17);
    assert_eq!(custom["truncated"], false);
    assert!(custom["description"].is_string());

    for variant in variants {
        assert!(variant["length"].as_u64().unwrap() <= 30);
    }
    let lengths: Vec<u64> = variants
        .iter()
        .map(|v| v["length"].as_u64().unwrap())
        .collect();
    assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_ads_missing_placeholder_is_rejected() {
    let server = common::offline_server();

    let response = server
        .post("/api/sem/ads")
        .json(&json!({ "product_name": "Widgets", "template": "Best deal" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert!(json["error"].as_str().unwrap().contains("{product}"));
}

#[tokio::test]
async fn test_ads_small_max_length_is_rejected() {
    let server = common::offline_server();

    let response = server
        .post("/api/sem/ads")
        .json(&json!({
            "product_name": "Widgets",
            "template": "{product}",
            "max_length": 2
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_ads_blank_product_is_rejected() {
    let server = common::offline_server();

    let response = server
        .post("/api/sem/ads")
        .json(&json!({ "product_name": "   ", "template": "{product}" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert!(json["error"].as_str().unwrap().contains("product_name"));
}

#[tokio::test]
async fn test_batch_ads_skips_blank_products() {
    let server = common::offline_server();

    let response = server
        .post("/api/sem/ads/batch")
        .json(&json!({
            "products": ["Tea", " ", "A very very long product name"],
            "template": "{product}",
            "max_length": 10
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    assert_eq!(items[0]["product"], "Tea");
    assert_eq!(items[0]["headline"], "Tea");
    assert_eq!(items[0]["truncated"], false);
    assert_eq!(items[0]["description"], "Batch-generated copy for Tea");

    assert_eq!(items[1]["headline"], "A very ...");
    assert_eq!(items[1]["length"], 10);
    assert_eq!(items[1]["truncated"], true);
    assert_eq!(json["message"], "Generated ad copy for 2 products");
}

#[tokio::test]
async fn test_batch_ads_all_blank_products_are_rejected() {
    let server = common::offline_server();

    let response = server
        .post("/api/sem/ads/batch")
        .json(&json!({ "products": ["", "  "], "template": "{product}" }))
        .await;

    response.assert_status_bad_request();
}
