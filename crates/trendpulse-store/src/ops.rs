use anyhow::Result;
use chrono::Utc;

use trendpulse_types::models::{
    Analytics, AnalyticsUpdate, ContentSuggestion, InsertAnalytics, InsertContentSuggestion,
    InsertProject, InsertTrendingVideo, InsertUser, Project, ProjectUpdate, TrendingVideo, User,
};

use crate::{Store, next_id};

/// Filter for the trending-videos listing. An unset value or the literal
/// `"all"` means no filter on that attribute; platform matching is exact,
/// category matching is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct VideoFilter {
    pub platform: Option<String>,
    pub category: Option<String>,
}

impl VideoFilter {
    fn matches(&self, video: &TrendingVideo) -> bool {
        if let Some(platform) = active(&self.platform) {
            if video.platform.as_str() != platform {
                return false;
            }
        }
        if let Some(category) = active(&self.category) {
            if !video.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        true
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    match value.as_deref() {
        None | Some("all") => None,
        Some(v) => Some(v),
    }
}

impl Store {
    // ── Users ───────────────────────────────────────────────────────────

    /// Username uniqueness is not enforced here; callers that care check
    /// with `user_by_username` first.
    pub fn create_user(&self, insert: InsertUser) -> Result<User> {
        self.with_inner(|inner| {
            let id = next_id(&mut inner.user_seq);
            let user = User {
                id,
                username: insert.username,
                password: insert.password,
                created_at: Utc::now(),
            };
            inner.users.insert(id, user.clone());
            user
        })
    }

    /// Linear scan over all users.
    pub fn user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.with_inner(|inner| {
            inner
                .users
                .values()
                .find(|u| u.username == username)
                .cloned()
        })
    }

    // ── Trending videos ─────────────────────────────────────────────────

    pub fn create_trending_video(&self, insert: InsertTrendingVideo) -> Result<TrendingVideo> {
        self.with_inner(|inner| {
            let id = next_id(&mut inner.video_seq);
            let video = TrendingVideo {
                id,
                title: insert.title,
                platform: insert.platform,
                views: insert.views,
                viral_score: insert.viral_score,
                creator: insert.creator,
                category: insert.category,
                thumbnail_url: insert.thumbnail_url,
                created_at: Utc::now(),
            };
            inner.trending_videos.insert(id, video.clone());
            video
        })
    }

    /// Matching videos sorted by viral score descending, id ascending on
    /// ties. Unrecognized filter values match nothing rather than failing.
    pub fn trending_videos(&self, filter: &VideoFilter) -> Result<Vec<TrendingVideo>> {
        self.with_inner(|inner| {
            let mut videos: Vec<TrendingVideo> = inner
                .trending_videos
                .values()
                .filter(|v| filter.matches(v))
                .cloned()
                .collect();
            videos.sort_by(|a, b| {
                b.viral_score
                    .total_cmp(&a.viral_score)
                    .then(a.id.cmp(&b.id))
            });
            videos
        })
    }

    // ── Projects ────────────────────────────────────────────────────────

    pub fn create_project(&self, insert: InsertProject) -> Result<Project> {
        self.with_inner(|inner| {
            let id = next_id(&mut inner.project_seq);
            let now = Utc::now();
            let project = Project {
                id,
                title: insert.title,
                description: insert.description,
                status: insert.status,
                progress: insert.progress.unwrap_or(0),
                created_at: now,
                updated_at: now,
            };
            inner.projects.insert(id, project.clone());
            project
        })
    }

    pub fn projects(&self) -> Result<Vec<Project>> {
        self.with_inner(|inner| {
            let mut projects: Vec<Project> = inner.projects.values().cloned().collect();
            projects.sort_by_key(|p| p.id);
            projects
        })
    }

    pub fn project_by_id(&self, id: i64) -> Result<Option<Project>> {
        self.with_inner(|inner| inner.projects.get(&id).cloned())
    }

    /// Merge the provided fields over the stored project and refresh
    /// `updated_at`. Returns `None` for an unknown id.
    pub fn update_project(&self, id: i64, update: ProjectUpdate) -> Result<Option<Project>> {
        self.with_inner(|inner| {
            inner.projects.get_mut(&id).map(|project| {
                if let Some(title) = update.title {
                    project.title = title;
                }
                if let Some(description) = update.description {
                    project.description = Some(description);
                }
                if let Some(status) = update.status {
                    project.status = status;
                }
                if let Some(progress) = update.progress {
                    project.progress = progress;
                }
                project.updated_at = Utc::now();
                project.clone()
            })
        })
    }

    // ── Content suggestions ─────────────────────────────────────────────

    pub fn create_content_suggestion(
        &self,
        insert: InsertContentSuggestion,
    ) -> Result<ContentSuggestion> {
        self.with_inner(|inner| {
            let id = next_id(&mut inner.suggestion_seq);
            let suggestion = ContentSuggestion {
                id,
                topic: insert.topic,
                platform: insert.platform,
                style: insert.style,
                titles: insert.titles,
                tags: insert.tags,
                content_ideas: insert.content_ideas,
                created_at: Utc::now(),
            };
            inner.content_suggestions.insert(id, suggestion.clone());
            suggestion
        })
    }

    pub fn content_suggestions(&self) -> Result<Vec<ContentSuggestion>> {
        self.with_inner(|inner| {
            let mut suggestions: Vec<ContentSuggestion> =
                inner.content_suggestions.values().cloned().collect();
            suggestions.sort_by_key(|s| s.id);
            suggestions
        })
    }

    // ── Analytics ───────────────────────────────────────────────────────

    pub fn create_analytics(&self, insert: InsertAnalytics) -> Result<Analytics> {
        self.with_inner(|inner| {
            let id = next_id(&mut inner.analytics_seq);
            let now = Utc::now();
            let analytics = Analytics {
                id,
                total_views: insert.total_views,
                viral_score: insert.viral_score,
                engagement_rate: insert.engagement_rate,
                growth_rate: insert.growth_rate,
                videos_published: insert.videos_published,
                new_followers: insert.new_followers,
                platform_distribution: insert.platform_distribution,
                performance_data: insert.performance_data,
                created_at: now,
                updated_at: now,
            };
            inner.analytics.insert(id, analytics.clone());
            analytics
        })
    }

    /// The row with the greatest `created_at`, id as tiebreak. Multiple
    /// rows may coexist; "latest" is not a singleton.
    pub fn latest_analytics(&self) -> Result<Option<Analytics>> {
        self.with_inner(|inner| {
            inner
                .analytics
                .values()
                .max_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
                .cloned()
        })
    }

    pub fn update_analytics(&self, id: i64, update: AnalyticsUpdate) -> Result<Option<Analytics>> {
        self.with_inner(|inner| {
            inner.analytics.get_mut(&id).map(|analytics| {
                if let Some(total_views) = update.total_views {
                    analytics.total_views = total_views;
                }
                if let Some(viral_score) = update.viral_score {
                    analytics.viral_score = viral_score;
                }
                if let Some(engagement_rate) = update.engagement_rate {
                    analytics.engagement_rate = engagement_rate;
                }
                if let Some(growth_rate) = update.growth_rate {
                    analytics.growth_rate = growth_rate;
                }
                if let Some(videos_published) = update.videos_published {
                    analytics.videos_published = videos_published;
                }
                if let Some(new_followers) = update.new_followers {
                    analytics.new_followers = new_followers;
                }
                if let Some(platform_distribution) = update.platform_distribution {
                    analytics.platform_distribution = platform_distribution;
                }
                if let Some(performance_data) = update.performance_data {
                    analytics.performance_data = performance_data;
                }
                analytics.updated_at = Utc::now();
                analytics.clone()
            })
        })
    }
}
