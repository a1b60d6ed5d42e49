//! Row types bridging Diesel and the domain entities.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::UsernameError;
use crate::domain::{Comment, CommentId, News, NewsId, Note, NoteId, User, UserId, Username};

use super::schema::{comments, news, notes, users};

#[derive(Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: i32,
    pub username: String,
    pub password_digest: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub username: String,
    pub password_digest: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<UserRow> for User {
    type Error = UsernameError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id),
            username: Username::new(row.username)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = news)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NewsRow {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = news)]
pub struct NewNewsRow {
    pub title: String,
    pub text: String,
    pub date: NaiveDateTime,
}

impl From<NewsRow> for News {
    fn from(row: NewsRow) -> Self {
        Self {
            id: NewsId::new(row.id),
            title: row.title,
            text: row.text,
            date: row.date,
        }
    }
}

#[derive(Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CommentRow {
    pub id: i32,
    pub news_id: i32,
    pub author_id: i32,
    pub text: String,
    pub created: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = comments)]
pub struct NewCommentRow {
    pub news_id: i32,
    pub author_id: i32,
    pub text: String,
    pub created: NaiveDateTime,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: CommentId::new(row.id),
            news_id: NewsId::new(row.news_id),
            author_id: UserId::new(row.author_id),
            text: row.text,
            created: row.created,
        }
    }
}

#[derive(Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = notes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NoteRow {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = notes)]
pub struct NewNoteRow {
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: i32,
}

/// Changeset replacing the mutable note columns.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = notes)]
pub struct NoteChangesRow {
    pub title: String,
    pub text: String,
    pub slug: String,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::new(row.id),
            title: row.title,
            text: row.text,
            slug: row.slug,
            author_id: UserId::new(row.author_id),
        }
    }
}
