//! Server construction and dependency wiring shared by the binary and the
//! integration tests.

mod config;

pub use config::AppConfig;

use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::{AuthService, CommentService, NewsService, NoteService};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{auth, news, notes};
use crate::middleware::Trace;
use crate::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselNewsRepository, DieselNoteRepository,
    DieselUserRepository,
};

/// Wire Diesel-backed services onto `pool`.
pub fn build_state(pool: &DbPool, news_count_on_home_page: usize) -> HttpState {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let news_repo = Arc::new(DieselNewsRepository::new(pool.clone()));
    let comment_repo = Arc::new(DieselCommentRepository::new(pool.clone()));
    let note_repo = Arc::new(DieselNoteRepository::new(pool.clone()));

    HttpState {
        auth: AuthService::new(users),
        news: NewsService::new(
            news_repo.clone(),
            comment_repo.clone(),
            news_count_on_home_page,
        ),
        comments: CommentService::new(comment_repo, news_repo),
        notes: NoteService::new(note_repo),
    }
}

/// Cookie session middleware.
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// Assemble the actix application: routes, session, health, tracing.
///
/// Literal paths (`/notes/add`, `/notes/done`) are registered before the
/// slug-parameterised notes routes so they are matched first.
pub fn build_app(
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
    session: SessionMiddleware<CookieSessionStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(health_state)
        .wrap(session)
        .wrap(Trace)
        .service(news::home)
        .service(news::detail)
        .service(news::comment_create)
        .service(news::comment_edit_form)
        .service(news::comment_edit)
        .service(news::comment_delete_form)
        .service(news::comment_delete)
        .service(notes::list)
        .service(notes::add_form)
        .service(notes::add)
        .service(notes::done)
        .service(notes::detail)
        .service(notes::edit_form)
        .service(notes::edit)
        .service(notes::delete_form)
        .service(notes::delete)
        .service(auth::login_form)
        .service(auth::login)
        .service(auth::logout)
        .service(auth::signup_form)
        .service(auth::signup)
        .service(ready)
        .service(live)
}
