//! Port abstraction for note persistence adapters.

use async_trait::async_trait;

use crate::domain::note::{Note, NoteId};
use crate::domain::user::UserId;

use super::StoreError;

/// Insert payload for a new note row.
#[derive(Debug, Clone)]
pub struct NewNoteRecord {
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: UserId,
}

/// Full replacement payload for an existing note.
#[derive(Debug, Clone)]
pub struct NoteChanges {
    pub title: String,
    pub text: String,
    pub slug: String,
}

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Persist a new note; `Conflict` when the slug is taken.
    async fn insert(&self, record: NewNoteRecord) -> Result<Note, StoreError>;

    /// Fetch a note by slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Note>, StoreError>;

    /// Replace title, text, and slug of an existing note; `Conflict` when the
    /// new slug is taken.
    async fn update(&self, id: NoteId, changes: NoteChanges) -> Result<Note, StoreError>;

    /// Remove a note.
    async fn delete(&self, id: NoteId) -> Result<(), StoreError>;

    /// Notes owned by `author_id` in insertion order.
    async fn list_by_author(&self, author_id: UserId) -> Result<Vec<Note>, StoreError>;
}
