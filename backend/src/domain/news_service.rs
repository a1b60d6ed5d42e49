//! Read-side use-cases for the news feed.

use std::sync::Arc;

use crate::domain::error::Error;
use crate::domain::news::{Comment, News, NewsId};
use crate::domain::ports::{CommentRepository, NewsRepository};

/// Default number of entries on the home page.
pub const DEFAULT_NEWS_COUNT_ON_HOME_PAGE: usize = 10;

#[derive(Clone)]
pub struct NewsService {
    news: Arc<dyn NewsRepository>,
    comments: Arc<dyn CommentRepository>,
    home_page_len: usize,
}

impl NewsService {
    pub fn new(
        news: Arc<dyn NewsRepository>,
        comments: Arc<dyn CommentRepository>,
        home_page_len: usize,
    ) -> Self {
        Self {
            news,
            comments,
            home_page_len,
        }
    }

    /// Newest entries first, capped at the configured page length. Entries
    /// beyond the cap are omitted entirely.
    pub async fn home_page(&self) -> Result<Vec<News>, Error> {
        let limit = i64::try_from(self.home_page_len)
            .map_err(|_| Error::internal("home page length out of range"))?;
        Ok(self.news.list_recent(limit).await?)
    }

    /// A news entry with its full comment thread, oldest comment first.
    pub async fn detail(&self, id: NewsId) -> Result<(News, Vec<Comment>), Error> {
        let news = self
            .news
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("news {id} not found")))?;
        let comments = self.comments.list_for_news(id).await?;
        Ok((news, comments))
    }
}
