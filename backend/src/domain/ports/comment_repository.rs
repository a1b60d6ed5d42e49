//! Port abstraction for comment persistence adapters.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::news::{Comment, CommentId, NewsId};
use crate::domain::user::UserId;

use super::StoreError;

/// Insert payload for a new comment row.
#[derive(Debug, Clone)]
pub struct NewCommentRecord {
    pub news_id: NewsId,
    pub author_id: UserId,
    pub text: String,
    pub created: NaiveDateTime,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment.
    async fn insert(&self, record: NewCommentRecord) -> Result<Comment, StoreError>;

    /// Fetch a comment by identifier.
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, StoreError>;

    /// Replace the text of an existing comment.
    async fn update_text(&self, id: CommentId, text: String) -> Result<Comment, StoreError>;

    /// Remove a comment.
    async fn delete(&self, id: CommentId) -> Result<(), StoreError>;

    /// All comments for `news_id`, oldest first.
    async fn list_for_news(&self, news_id: NewsId) -> Result<Vec<Comment>, StoreError>;
}
