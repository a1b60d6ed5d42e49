//! Comment submission and author-gated mutation use-cases.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::error::Error;
use crate::domain::moderation::{MODERATION_WARNING, find_banned_word};
use crate::domain::news::{Comment, CommentId, NewsId};
use crate::domain::ports::{CommentRepository, NewCommentRecord, NewsRepository};
use crate::domain::user::UserId;

#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    news: Arc<dyn NewsRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, news: Arc<dyn NewsRepository>) -> Self {
        Self { comments, news }
    }

    /// Persist a new comment on `news_id` after screening its text.
    pub async fn create(
        &self,
        news_id: NewsId,
        author_id: UserId,
        text: &str,
    ) -> Result<Comment, Error> {
        screen_text(text)?;
        self.news
            .find_by_id(news_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("news {news_id} not found")))?;
        let record = NewCommentRecord {
            news_id,
            author_id,
            text: text.to_owned(),
            created: Utc::now().naive_utc(),
        };
        Ok(self.comments.insert(record).await?)
    }

    /// Fetch a comment for its author. Any other identity gets not-found, so
    /// non-owners never learn the comment exists.
    pub async fn fetch_owned(&self, id: CommentId, acting: UserId) -> Result<Comment, Error> {
        match self.comments.find_by_id(id).await? {
            Some(comment) if comment.author_id == acting => Ok(comment),
            _ => Err(Error::not_found(format!("comment {id} not found"))),
        }
    }

    /// Replace the text of the author's own comment. Ownership is checked
    /// before the text is screened, so non-owners see not-found either way.
    pub async fn update_text(
        &self,
        id: CommentId,
        acting: UserId,
        text: &str,
    ) -> Result<Comment, Error> {
        let comment = self.fetch_owned(id, acting).await?;
        screen_text(text)?;
        Ok(self.comments.update_text(comment.id, text.to_owned()).await?)
    }

    /// Delete the author's own comment, returning the news it belonged to.
    pub async fn delete(&self, id: CommentId, acting: UserId) -> Result<NewsId, Error> {
        let comment = self.fetch_owned(id, acting).await?;
        self.comments.delete(comment.id).await?;
        Ok(comment.news_id)
    }
}

fn screen_text(text: &str) -> Result<(), Error> {
    if text.trim().is_empty() {
        return Err(Error::validation("text", "comment text must not be empty"));
    }
    if find_banned_word(text).is_some() {
        return Err(Error::validation("text", MODERATION_WARNING));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screening_rejects_banned_words_with_the_fixed_warning() {
        let error = screen_text("Какой-то текст, редиска, еще текст").expect_err("banned");
        assert_eq!(error, Error::validation("text", MODERATION_WARNING));
    }

    #[test]
    fn screening_rejects_blank_text() {
        assert!(screen_text("   ").is_err());
    }

    #[test]
    fn screening_accepts_clean_text() {
        assert!(screen_text("Новый текст комментария").is_ok());
    }
}
