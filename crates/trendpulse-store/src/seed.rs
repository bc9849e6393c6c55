//! Sample rows served before any user-created data exists.

use std::collections::HashMap;

use anyhow::Result;

use trendpulse_types::models::{
    InsertAnalytics, InsertTrendingVideo, PerformanceData, Platform,
};

use crate::Store;

/// Insert the sample rows through the regular create operations so
/// identifier assignment and timestamps behave exactly as for user data.
pub fn populate(store: &Store) -> Result<()> {
    for video in sample_videos() {
        store.create_trending_video(video)?;
    }
    store.create_analytics(sample_analytics())?;
    Ok(())
}

fn sample_videos() -> Vec<InsertTrendingVideo> {
    vec![
        InsertTrendingVideo {
            title: "My Perfect Morning Routine for Productivity".to_string(),
            platform: Platform::Youtube,
            views: 2_100_000,
            viral_score: 9.2,
            creator: "@productivityguru".to_string(),
            category: "Lifestyle".to_string(),
            thumbnail_url: Some(
                "https://images.unsplash.com/photo-1586281380349-632531db7ed4".to_string(),
            ),
        },
        InsertTrendingVideo {
            title: "5 Minute Makeup Tutorial ✨".to_string(),
            platform: Platform::Tiktok,
            views: 890_000,
            viral_score: 8.7,
            creator: "@beautyhacks101".to_string(),
            category: "Beauty".to_string(),
            thumbnail_url: Some(
                "https://images.unsplash.com/photo-1611162617474-5b21e879e113".to_string(),
            ),
        },
        InsertTrendingVideo {
            title: "How I Gained 1M Followers in 30 Days".to_string(),
            platform: Platform::Youtube,
            views: 1_500_000,
            viral_score: 9.5,
            creator: "@growthhacker".to_string(),
            category: "Marketing".to_string(),
            thumbnail_url: None,
        },
        InsertTrendingVideo {
            title: "Beginner’s Guide to Reels Editing 🎬".to_string(),
            platform: Platform::Instagram,
            views: 620_000,
            viral_score: 8.3,
            creator: "@editqueen".to_string(),
            category: "Tech".to_string(),
            thumbnail_url: None,
        },
        InsertTrendingVideo {
            title: "Day in My Life as a Remote Dev".to_string(),
            platform: Platform::Youtube,
            views: 450_000,
            viral_score: 7.9,
            creator: "@codedaily".to_string(),
            category: "Lifestyle".to_string(),
            thumbnail_url: None,
        },
        InsertTrendingVideo {
            title: "Viral TikTok Dance Explained".to_string(),
            platform: Platform::Tiktok,
            views: 1_340_000,
            viral_score: 8.8,
            creator: "@trendspotter".to_string(),
            category: "Entertainment".to_string(),
            thumbnail_url: None,
        },
    ]
}

fn sample_analytics() -> InsertAnalytics {
    InsertAnalytics {
        total_views: 2_400_000,
        viral_score: 8.7,
        engagement_rate: 15.2,
        growth_rate: 24.0,
        videos_published: 42,
        new_followers: 156_000,
        platform_distribution: HashMap::from([
            ("youtube".to_string(), 45.0),
            ("tiktok".to_string(), 35.0),
            ("instagram".to_string(), 20.0),
        ]),
        performance_data: PerformanceData {
            daily: vec![12_000, 19_000, 15_000, 25_000, 22_000, 30_000, 28_000],
            weekly: vec![1_200_000, 1_900_000, 1_500_000, 2_100_000],
        },
    }
}
