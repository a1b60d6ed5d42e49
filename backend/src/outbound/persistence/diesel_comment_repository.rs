//! SQLite-backed `CommentRepository` adapter.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{CommentRepository, NewCommentRecord, StoreError};
use crate::domain::{Comment, CommentId, NewsId};

use super::diesel_helpers::{map_diesel_error, with_connection};
use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::comments;

#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn insert(&self, record: NewCommentRecord) -> Result<Comment, StoreError> {
        with_connection(&self.pool, move |conn| {
            let row = NewCommentRow {
                news_id: record.news_id.get(),
                author_id: record.author_id.get(),
                text: record.text,
                created: record.created,
            };
            let inserted: CommentRow = diesel::insert_into(comments::table)
                .values(&row)
                .returning(CommentRow::as_returning())
                .get_result(conn)
                .map_err(map_diesel_error)?;
            Ok(Comment::from(inserted))
        })
        .await
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, StoreError> {
        with_connection(&self.pool, move |conn| {
            let row = comments::table
                .find(id.get())
                .select(CommentRow::as_select())
                .first::<CommentRow>(conn)
                .optional()
                .map_err(map_diesel_error)?;
            Ok(row.map(Comment::from))
        })
        .await
    }

    async fn update_text(&self, id: CommentId, text: String) -> Result<Comment, StoreError> {
        with_connection(&self.pool, move |conn| {
            let updated: CommentRow = diesel::update(comments::table.find(id.get()))
                .set(comments::text.eq(text))
                .returning(CommentRow::as_returning())
                .get_result(conn)
                .map_err(map_diesel_error)?;
            Ok(Comment::from(updated))
        })
        .await
    }

    async fn delete(&self, id: CommentId) -> Result<(), StoreError> {
        with_connection(&self.pool, move |conn| {
            diesel::delete(comments::table.find(id.get()))
                .execute(conn)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }

    async fn list_for_news(&self, news_id: NewsId) -> Result<Vec<Comment>, StoreError> {
        with_connection(&self.pool, move |conn| {
            let rows = comments::table
                .filter(comments::news_id.eq(news_id.get()))
                .order(comments::created.asc())
                .select(CommentRow::as_select())
                .load::<CommentRow>(conn)
                .map_err(map_diesel_error)?;
            Ok(rows.into_iter().map(Comment::from).collect())
        })
        .await
    }
}
