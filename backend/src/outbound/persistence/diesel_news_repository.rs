//! SQLite-backed `NewsRepository` adapter.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{NewNewsRecord, NewsRepository, StoreError};
use crate::domain::{News, NewsId};

use super::diesel_helpers::{map_diesel_error, with_connection};
use super::models::{NewNewsRow, NewsRow};
use super::pool::DbPool;
use super::schema::news;

#[derive(Clone)]
pub struct DieselNewsRepository {
    pool: DbPool,
}

impl DieselNewsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for DieselNewsRepository {
    async fn insert(&self, record: NewNewsRecord) -> Result<News, StoreError> {
        with_connection(&self.pool, move |conn| {
            let row = NewNewsRow {
                title: record.title,
                text: record.text,
                date: record.date,
            };
            let inserted: NewsRow = diesel::insert_into(news::table)
                .values(&row)
                .returning(NewsRow::as_returning())
                .get_result(conn)
                .map_err(map_diesel_error)?;
            Ok(News::from(inserted))
        })
        .await
    }

    async fn find_by_id(&self, id: NewsId) -> Result<Option<News>, StoreError> {
        with_connection(&self.pool, move |conn| {
            let row = news::table
                .find(id.get())
                .select(NewsRow::as_select())
                .first::<NewsRow>(conn)
                .optional()
                .map_err(map_diesel_error)?;
            Ok(row.map(News::from))
        })
        .await
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<News>, StoreError> {
        with_connection(&self.pool, move |conn| {
            let rows = news::table
                .order(news::date.desc())
                .limit(limit)
                .select(NewsRow::as_select())
                .load::<NewsRow>(conn)
                .map_err(map_diesel_error)?;
            Ok(rows.into_iter().map(News::from).collect())
        })
        .await
    }
}
