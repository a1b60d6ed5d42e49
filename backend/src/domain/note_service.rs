//! Note CRUD use-cases with slug resolution and owner scoping.

use std::sync::Arc;

use crate::domain::error::Error;
use crate::domain::note::{Note, NoteDraft, NoteId, SLUG_TAKEN_SUFFIX};
use crate::domain::ports::{NewNoteRecord, NoteChanges, NoteRepository, StoreError};
use crate::domain::slug::{is_valid_slug, slugify};
use crate::domain::user::UserId;

#[derive(Clone)]
pub struct NoteService {
    notes: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }

    /// Create a note for `author_id`, deriving a slug when none is supplied.
    ///
    /// Supplied slugs are pre-checked against existing notes; derived slugs
    /// rely on the store's unique constraint as the backstop.
    pub async fn create(&self, author_id: UserId, draft: NoteDraft) -> Result<Note, Error> {
        let NoteDraft { title, text, slug } = draft;
        validate_body(&title, &text)?;
        let slug = match supplied(slug) {
            Some(slug) => {
                self.check_supplied_slug(&slug, None).await?;
                slug
            }
            None => slugify(&title),
        };
        let record = NewNoteRecord {
            title,
            text,
            slug: slug.clone(),
            author_id,
        };
        match self.notes.insert(record).await {
            Ok(note) => Ok(note),
            Err(StoreError::Conflict { .. }) => Err(slug_taken_error(&slug)),
            Err(other) => Err(other.into()),
        }
    }

    /// Notes owned by `author_id`.
    pub async fn list(&self, author_id: UserId) -> Result<Vec<Note>, Error> {
        Ok(self.notes.list_by_author(author_id).await?)
    }

    /// Fetch a note for its author. Any other identity gets not-found, so
    /// non-owners never learn the note exists.
    pub async fn fetch_owned(&self, slug: &str, acting: UserId) -> Result<Note, Error> {
        match self.notes.find_by_slug(slug).await? {
            Some(note) if note.author_id == acting => Ok(note),
            _ => Err(Error::not_found(format!("note {slug} not found"))),
        }
    }

    /// Replace the author's note, re-deriving the slug when it is omitted.
    pub async fn update(
        &self,
        slug: &str,
        acting: UserId,
        draft: NoteDraft,
    ) -> Result<Note, Error> {
        let current = self.fetch_owned(slug, acting).await?;
        let NoteDraft {
            title,
            text,
            slug: new_slug,
        } = draft;
        validate_body(&title, &text)?;
        let new_slug = match supplied(new_slug) {
            Some(new_slug) => {
                self.check_supplied_slug(&new_slug, Some(current.id)).await?;
                new_slug
            }
            None => slugify(&title),
        };
        let changes = NoteChanges {
            title,
            text,
            slug: new_slug.clone(),
        };
        match self.notes.update(current.id, changes).await {
            Ok(note) => Ok(note),
            Err(StoreError::Conflict { .. }) => Err(slug_taken_error(&new_slug)),
            Err(other) => Err(other.into()),
        }
    }

    /// Delete the author's note.
    pub async fn delete(&self, slug: &str, acting: UserId) -> Result<(), Error> {
        let note = self.fetch_owned(slug, acting).await?;
        Ok(self.notes.delete(note.id).await?)
    }

    async fn check_supplied_slug(&self, slug: &str, exclude: Option<NoteId>) -> Result<(), Error> {
        if !is_valid_slug(slug) {
            return Err(Error::validation(
                "slug",
                "slug may only contain letters, digits, hyphens, and underscores",
            ));
        }
        if let Some(existing) = self.notes.find_by_slug(slug).await? {
            if exclude != Some(existing.id) {
                return Err(slug_taken_error(slug));
            }
        }
        Ok(())
    }
}

/// An empty slug field counts as omitted.
fn supplied(slug: Option<String>) -> Option<String> {
    slug.filter(|candidate| !candidate.is_empty())
}

fn slug_taken_error(slug: &str) -> Error {
    Error::validation("slug", format!("{slug}{SLUG_TAKEN_SUFFIX}"))
}

fn validate_body(title: &str, text: &str) -> Result<(), Error> {
    if title.trim().is_empty() {
        return Err(Error::validation("title", "title must not be empty"));
    }
    if text.trim().is_empty() {
        return Err(Error::validation("text", "text must not be empty"));
    }
    Ok(())
}
