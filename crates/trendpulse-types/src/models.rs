use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform a piece of content lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Tiktok,
    Instagram,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
        }
    }
}

/// Lifecycle stage of a content-production project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planning" => Some(ProjectStatus::Planning),
            "in-progress" => Some(ProjectStatus::InProgress),
            "completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingVideo {
    pub id: i64,
    pub title: String,
    pub platform: Platform,
    pub views: i64,
    pub viral_score: f64,
    pub creator: String,
    pub category: String,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTrendingVideo {
    pub title: String,
    pub platform: Platform,
    pub views: i64,
    pub viral_score: f64,
    pub creator: String,
    pub category: String,
    pub thumbnail_url: Option<String>,
}

/// One concrete video idea inside a suggestion set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub title: String,
    pub description: String,
    pub engagement: String,
}

/// A generated suggestion set, kept as history once served.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSuggestion {
    pub id: i64,
    pub topic: String,
    pub platform: String,
    pub style: String,
    pub titles: Vec<String>,
    pub tags: Vec<String>,
    pub content_ideas: Vec<ContentIdea>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertContentSuggestion {
    pub topic: String,
    pub platform: String,
    pub style: String,
    pub titles: Vec<String>,
    pub tags: Vec<String>,
    pub content_ideas: Vec<ContentIdea>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a project. `description` defaults to null and
/// `progress` to 0 when unset; the store applies both defaults at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProject {
    pub title: String,
    pub status: ProjectStatus,
    pub description: Option<String>,
    pub progress: Option<u8>,
}

/// Partial update for a project; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<u8>,
}

/// View counts over time, as the dashboard charts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceData {
    pub daily: Vec<i64>,
    pub weekly: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub id: i64,
    pub total_views: i64,
    pub viral_score: f64,
    pub engagement_rate: f64,
    pub growth_rate: f64,
    pub videos_published: i64,
    pub new_followers: i64,
    pub platform_distribution: HashMap<String, f64>,
    pub performance_data: PerformanceData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAnalytics {
    pub total_views: i64,
    pub viral_score: f64,
    pub engagement_rate: f64,
    pub growth_rate: f64,
    pub videos_published: i64,
    pub new_followers: i64,
    pub platform_distribution: HashMap<String, f64>,
    pub performance_data: PerformanceData,
}

/// Partial update for an analytics row; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsUpdate {
    pub total_views: Option<i64>,
    pub viral_score: Option<f64>,
    pub engagement_rate: Option<f64>,
    pub growth_rate: Option<f64>,
    pub videos_published: Option<i64>,
    pub new_followers: Option<i64>,
    pub platform_distribution: Option<HashMap<String, f64>>,
    pub performance_data: Option<PerformanceData>,
}
