//! Note entity and form input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::user::UserId;

/// Field error suffix reported when a supplied slug is already in use. The
/// full message is the colliding slug followed by this suffix.
pub const SLUG_TAKEN_SUFFIX: &str =
    " - такой slug уже существует, придумайте уникальное значение!";

/// Integer key of a note. Paths address notes by slug; the id stays internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i32);

impl NoteId {
    pub fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Personal note. The slug is globally unique; only the author may read or
/// mutate the note once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: UserId,
}

/// Incoming note payload before slug resolution. A missing or empty slug
/// means "derive one from the title".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub text: String,
    pub slug: Option<String>,
}
