//! API integration tests
//!
//! These run against a live server on localhost:8080. Each test creates
//! records with ids unlikely to collide with other tests.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

fn book_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": "The Rust Programming Language",
        "author": "Steve Klabnik",
        "year": 2019,
        "isbn": "1593278284"
    })
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_welcome() {
    let client = Client::new();

    let response = client
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("X-Process-Time"));

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Welcome to Digital Library API");
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_book_crud_flow() {
    let client = Client::new();
    let id = 9001;

    // Create
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_json(id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Read back
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "The Rust Programming Language");

    // Update
    let mut updated = book_json(id);
    updated["title"] = json!("Programming Rust");
    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&updated)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Programming Rust");

    // Delete
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Gone
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_create_duplicate_id() {
    let client = Client::new();
    let id = 9002;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_json(id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_json(id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Cleanup
    client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
}

#[tokio::test]
#[ignore]
async fn test_create_invalid_isbn() {
    let client = Client::new();

    let mut book = book_json(9003);
    book["isbn"] = json!("123");

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "ISBN must be 10 or 13 characters long");
}

#[tokio::test]
#[ignore]
async fn test_create_invalid_year() {
    let client = Client::new();

    let mut book = book_json(9004);
    book["year"] = json!(999);

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_update_missing_book() {
    let client = Client::new();

    let response = client
        .put(format!("{}/books/9005", BASE_URL))
        .json(&book_json(9005))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_book() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/9006", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
