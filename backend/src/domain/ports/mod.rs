//! Persistence ports separating domain services from storage adapters.

mod comment_repository;
mod news_repository;
mod note_repository;
mod user_repository;

pub use comment_repository::{CommentRepository, NewCommentRecord};
pub use news_repository::{NewNewsRecord, NewsRepository};
pub use note_repository::{NewNoteRecord, NoteChanges, NoteRepository};
pub use user_repository::{NewUserRecord, UserCredentials, UserRepository};

/// Failures shared by every storage adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or a connection checked out.
    #[error("store connection failed: {message}")]
    Connection { message: String },
    /// A query or mutation failed during execution.
    #[error("store query failed: {message}")]
    Query { message: String },
    /// A uniqueness or referential constraint rejected the write.
    #[error("store constraint violated: {message}")]
    Conflict { message: String },
}

impl StoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}
