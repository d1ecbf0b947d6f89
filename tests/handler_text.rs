mod common;

use serde_json::json;

#[tokio::test]
async fn test_word_frequency_ranks_words() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/word-frequency")
        .json(&json!({ "text": "Buy shoes, buy boots" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert!(json.get("error").is_none());

    let words = json["data"]["words"].as_array().unwrap();
    assert_eq!(words.len(), 3);
    assert_eq!(words[0]["word"], "buy");
    assert_eq!(words[0]["count"], 2);
    assert_eq!(words[0]["percentage"], 50.0);
    // ties ordered alphabetically
    assert_eq!(words[1]["word"], "boots");
    assert_eq!(words[2]["word"], "shoes");

    let stats = &json["data"]["statistics"];
    assert_eq!(stats["total_words"], 4);
    assert_eq!(stats["unique_words"], 3);
    assert_eq!(stats["avg_word_length"], 4.0);
    assert_eq!(stats["text_length"], 20);
}

#[tokio::test]
async fn test_word_frequency_respects_top_words() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/word-frequency")
        .json(&json!({ "text": "one two three four", "top_words": 2 }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"]["words"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["statistics"]["unique_words"], 4);
}

#[tokio::test]
async fn test_word_frequency_blank_text_is_rejected() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/word-frequency")
        .json(&json!({ "text": "   " }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("text"));
}

#[tokio::test]
async fn test_word_frequency_without_long_enough_words_is_rejected() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/word-frequency")
        .json(&json!({ "text": "a b c", "min_length": 2 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["success"], false);
}

#[tokio::test]
async fn test_word_frequency_out_of_range_limits_are_rejected() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/word-frequency")
        .json(&json!({ "text": "hello world", "top_words": 0 }))
        .await;
    response.assert_status_bad_request();

    let response = server
        .post("/api/text/word-frequency")
        .json(&json!({ "text": "hello world", "min_length": 101 }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_malformed_json_is_reported_in_envelope() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/word-frequency")
        .text("{ not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_wrong_field_type_is_bad_request() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/word-frequency")
        .json(&json!({ "text": "hello", "top_words": "many" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["success"], false);
}

#[tokio::test]
async fn test_extract_single_type_groups_values() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/extract")
        .json(&json!({ "text": "#sale #new #sale", "type": "hashtags" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["value"], "#sale");
    assert_eq!(data[0]["count"], 2);
    assert_eq!(data[0]["type"], "hashtag");
    assert_eq!(data[1]["value"], "#new");
    assert_eq!(data[1]["count"], 1);
}

#[tokio::test]
async fn test_extract_all_builds_summary() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/extract")
        .json(&json!({ "text": "Mail a@b.co about #sale and @shop" }))
        .await;

    response.assert_status_ok();

    let data = &response.json::<serde_json::Value>()["data"];
    assert_eq!(data["emails"], json!(["a@b.co"]));
    assert_eq!(data["hashtags"], json!(["#sale"]));
    assert_eq!(data["urls"], json!([]));

    let summary = data["summary"].as_array().unwrap();
    let kinds: Vec<&str> = summary.iter().map(|s| s["type"].as_str().unwrap()).collect();
    assert!(kinds.contains(&"email"));
    assert!(kinds.contains(&"hashtag"));
    assert!(!kinds.contains(&"url"));
}

#[tokio::test]
async fn test_extract_unknown_type_is_rejected() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/extract")
        .json(&json!({ "text": "hello", "type": "phones" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_stats_counts_sentences_and_paragraphs() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/stats")
        .json(&json!({ "text": "Hello world. How are you?\n\nFine!" }))
        .await;

    response.assert_status_ok();

    let data = &response.json::<serde_json::Value>()["data"];
    assert_eq!(data["words"], 6);
    assert_eq!(data["sentences"], 3);
    assert_eq!(data["paragraphs"], 2);
    assert_eq!(data["reading_time_minutes"], 1);
    assert_eq!(data["avg_words_per_sentence"], 2.0);
}

#[tokio::test]
async fn test_sentiment_positive_text() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/sentiment")
        .json(&json!({ "text": "Great product, excellent support" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let data = &json["data"];
    assert_eq!(data["sentiment"], "positive");
    assert_eq!(data["score"], 1.0);
    assert_eq!(data["confidence"], 1.0);
    assert_eq!(data["positive_words"], 2);
    assert_eq!(data["negative_words"], 0);
    assert!(json["message"].as_str().unwrap().contains("positive"));
}

#[tokio::test]
async fn test_sentiment_without_lexicon_terms_is_neutral() {
    let server = common::offline_server();

    let response = server
        .post("/api/text/sentiment")
        .json(&json!({ "text": "The package arrived on Tuesday" }))
        .await;

    response.assert_status_ok();

    let data = &response.json::<serde_json::Value>()["data"];
    assert_eq!(data["sentiment"], "neutral");
    assert_eq!(data["score"], 0.0);
}
