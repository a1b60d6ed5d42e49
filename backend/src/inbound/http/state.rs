//! Shared HTTP adapter state.
//!
//! Handlers accept this bundle via `actix_web::web::Data`, so they only
//! depend on domain services and stay testable against any port wiring.

use crate::domain::{AuthService, CommentService, NewsService, NoteService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: AuthService,
    pub news: NewsService,
    pub comments: CommentService,
    pub notes: NoteService,
}
