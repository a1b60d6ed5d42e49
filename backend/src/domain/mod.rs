//! Domain entities, business rules, services, and persistence ports.
//!
//! Everything here is transport agnostic. Inbound adapters translate HTTP
//! requests into service calls; outbound adapters implement the ports in
//! [`ports`]. Invariants live on the types and services, not in handlers.

pub mod auth_service;
pub mod comment_service;
pub mod error;
pub mod moderation;
pub mod news;
pub mod news_service;
pub mod note;
pub mod note_service;
pub mod ports;
pub mod slug;
pub mod user;

pub use auth_service::AuthService;
pub use comment_service::CommentService;
pub use error::Error;
pub use news::{Comment, CommentId, News, NewsId};
pub use news_service::{DEFAULT_NEWS_COUNT_ON_HOME_PAGE, NewsService};
pub use note::{Note, NoteDraft, NoteId, SLUG_TAKEN_SUFFIX};
pub use note_service::NoteService;
pub use user::{User, UserId, Username};
