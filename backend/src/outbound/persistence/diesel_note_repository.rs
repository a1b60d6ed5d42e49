//! SQLite-backed `NoteRepository` adapter.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{NewNoteRecord, NoteChanges, NoteRepository, StoreError};
use crate::domain::{Note, NoteId, UserId};

use super::diesel_helpers::{map_diesel_error, with_connection};
use super::models::{NewNoteRow, NoteChangesRow, NoteRow};
use super::pool::DbPool;
use super::schema::notes;

#[derive(Clone)]
pub struct DieselNoteRepository {
    pool: DbPool,
}

impl DieselNoteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for DieselNoteRepository {
    async fn insert(&self, record: NewNoteRecord) -> Result<Note, StoreError> {
        with_connection(&self.pool, move |conn| {
            let row = NewNoteRow {
                title: record.title,
                text: record.text,
                slug: record.slug,
                author_id: record.author_id.get(),
            };
            let inserted: NoteRow = diesel::insert_into(notes::table)
                .values(&row)
                .returning(NoteRow::as_returning())
                .get_result(conn)
                .map_err(map_diesel_error)?;
            Ok(Note::from(inserted))
        })
        .await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Note>, StoreError> {
        let slug = slug.to_owned();
        with_connection(&self.pool, move |conn| {
            let row = notes::table
                .filter(notes::slug.eq(&slug))
                .select(NoteRow::as_select())
                .first::<NoteRow>(conn)
                .optional()
                .map_err(map_diesel_error)?;
            Ok(row.map(Note::from))
        })
        .await
    }

    async fn update(&self, id: NoteId, changes: NoteChanges) -> Result<Note, StoreError> {
        with_connection(&self.pool, move |conn| {
            let row = NoteChangesRow {
                title: changes.title,
                text: changes.text,
                slug: changes.slug,
            };
            let updated: NoteRow = diesel::update(notes::table.find(id.get()))
                .set(&row)
                .returning(NoteRow::as_returning())
                .get_result(conn)
                .map_err(map_diesel_error)?;
            Ok(Note::from(updated))
        })
        .await
    }

    async fn delete(&self, id: NoteId) -> Result<(), StoreError> {
        with_connection(&self.pool, move |conn| {
            diesel::delete(notes::table.find(id.get()))
                .execute(conn)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }

    async fn list_by_author(&self, author_id: UserId) -> Result<Vec<Note>, StoreError> {
        with_connection(&self.pool, move |conn| {
            let rows = notes::table
                .filter(notes::author_id.eq(author_id.get()))
                .order(notes::id.asc())
                .select(NoteRow::as_select())
                .load::<NoteRow>(conn)
                .map_err(map_diesel_error)?;
            Ok(rows.into_iter().map(Note::from).collect())
        })
        .await
    }
}
