//! End-to-end tests for the analytics endpoint.

mod common;

use common::TestServer;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_seeded_analytics() {
    let server = TestServer::spawn().await;

    let response = reqwest::get(server.url("/api/analytics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let analytics: Value = response.json().await.unwrap();

    assert_eq!(analytics["totalViews"], 2_400_000);
    assert_eq!(analytics["viralScore"], 8.7);
    assert_eq!(analytics["platformDistribution"]["youtube"], 45.0);
    assert_eq!(
        analytics["performanceData"]["daily"].as_array().unwrap().len(),
        7
    );
    assert_eq!(
        analytics["performanceData"]["weekly"].as_array().unwrap().len(),
        4
    );
}

#[tokio::test]
async fn test_no_analytics_is_404() {
    let server = TestServer::spawn_empty().await;

    let response = reqwest::get(server.url("/api/analytics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "analytics not found");
}
