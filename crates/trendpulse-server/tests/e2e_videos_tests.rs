//! End-to-end tests for the trending-videos listing and its filters.

mod common;

use common::TestServer;
use reqwest::StatusCode;
use serde_json::Value;

async fn fetch_videos(server: &TestServer, query: &str) -> Vec<Value> {
    let url = if query.is_empty() {
        server.url("/api/trending-videos")
    } else {
        server.url(&format!("/api/trending-videos?{}", query))
    };
    let response = reqwest::get(url).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::spawn().await;
    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_seeded_listing_sorted_by_viral_score() {
    let server = TestServer::spawn().await;
    let videos = fetch_videos(&server, "").await;

    assert_eq!(videos.len(), 6);
    assert_eq!(videos[0]["title"], "How I Gained 1M Followers in 30 Days");
    assert_eq!(videos[0]["viralScore"], 9.5);

    let scores: Vec<f64> = videos.iter().map(|v| v["viralScore"].as_f64().unwrap()).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(scores, sorted);
}

#[tokio::test]
async fn test_platform_filter() {
    let server = TestServer::spawn().await;

    let youtube = fetch_videos(&server, "platform=youtube").await;
    assert_eq!(youtube.len(), 3);
    assert!(youtube.iter().all(|v| v["platform"] == "youtube"));

    let tiktok = fetch_videos(&server, "platform=tiktok").await;
    assert_eq!(tiktok.len(), 2);
}

#[tokio::test]
async fn test_all_means_no_filter() {
    let server = TestServer::spawn().await;

    let all = fetch_videos(&server, "platform=all&category=all").await;
    assert_eq!(all.len(), 6);
}

#[tokio::test]
async fn test_category_filter_is_case_insensitive() {
    let server = TestServer::spawn().await;

    let lifestyle = fetch_videos(&server, "category=lifestyle").await;
    assert_eq!(lifestyle.len(), 2);
    assert!(lifestyle.iter().all(|v| v["category"] == "Lifestyle"));
}

#[tokio::test]
async fn test_combined_filters() {
    let server = TestServer::spawn().await;

    let videos = fetch_videos(&server, "platform=youtube&category=lifestyle").await;
    assert_eq!(videos.len(), 2);
}

#[tokio::test]
async fn test_unknown_platform_matches_nothing() {
    let server = TestServer::spawn().await;

    let videos = fetch_videos(&server, "platform=vimeo").await;
    assert!(videos.is_empty());
}

#[tokio::test]
async fn test_video_wire_shape() {
    let server = TestServer::spawn().await;
    let videos = fetch_videos(&server, "platform=youtube&category=marketing").await;

    assert_eq!(videos.len(), 1);
    let video = &videos[0];
    assert!(video["id"].is_i64());
    assert!(video["views"].is_i64());
    assert!(video["creator"].as_str().unwrap().starts_with('@'));
    assert!(video.get("thumbnailUrl").is_some());
    assert!(video["createdAt"].is_string());
}
