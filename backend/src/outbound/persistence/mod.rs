//! Diesel-backed persistence adapters for the domain ports.

mod diesel_comment_repository;
mod diesel_helpers;
mod diesel_news_repository;
mod diesel_note_repository;
mod diesel_user_repository;
mod models;
mod pool;
pub mod schema;

pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_news_repository::DieselNewsRepository;
pub use diesel_note_repository::DieselNoteRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolError, build_pool, run_migrations};
