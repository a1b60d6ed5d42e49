//! Port abstraction for news persistence adapters.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::news::{News, NewsId};

use super::StoreError;

/// Insert payload for a new news row.
#[derive(Debug, Clone)]
pub struct NewNewsRecord {
    pub title: String,
    pub text: String,
    pub date: NaiveDateTime,
}

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Persist a new news entry.
    async fn insert(&self, record: NewNewsRecord) -> Result<News, StoreError>;

    /// Fetch a news entry by identifier.
    async fn find_by_id(&self, id: NewsId) -> Result<Option<News>, StoreError>;

    /// Most recent entries first, at most `limit` of them.
    async fn list_recent(&self, limit: i64) -> Result<Vec<News>, StoreError>;
}
