pub mod ops;
pub mod seed;

pub use ops::VideoFilter;

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use tracing::info;

use trendpulse_types::models::{Analytics, ContentSuggestion, Project, TrendingVideo, User};

/// In-memory repository for all entity state.
///
/// The single mutex serializes every read-merge-write sequence, so two
/// requests mutating the same entity are applied in arrival order. All
/// state is process-lifetime only; nothing survives a restart.
pub struct Store {
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    users: HashMap<i64, User>,
    trending_videos: HashMap<i64, TrendingVideo>,
    content_suggestions: HashMap<i64, ContentSuggestion>,
    projects: HashMap<i64, Project>,
    analytics: HashMap<i64, Analytics>,

    user_seq: i64,
    video_seq: i64,
    suggestion_seq: i64,
    project_seq: i64,
    analytics_seq: i64,
}

/// Counters start at 1 and identifiers are never reused.
fn next_id(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// A store pre-populated with the sample trending videos and analytics
    /// snapshot the dashboard shows before any user data exists.
    pub fn with_seed_data() -> Result<Self> {
        let store = Self::new();
        seed::populate(&store)?;
        info!("Store seeded with sample data");
        Ok(store)
    }

    fn with_inner<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut StoreInner) -> T,
    {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| anyhow::anyhow!("store lock poisoned: {}", e))?;
        Ok(f(&mut inner))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
