//! Helpers for integration tests: disposable databases, seeded fixtures, and
//! session plumbing.
//!
//! Compiled only with the `test-support` feature, which the dev-dependency on
//! this crate turns on for test builds.

use actix_http::Request;
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::body::{BoxBody, MessageBody};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web};
use chrono::NaiveDateTime;
use serde_json::json;
use tempfile::TempDir;

use crate::domain::ports::{
    CommentRepository, NewCommentRecord, NewNewsRecord, NewNoteRecord, NewsRepository,
    NoteRepository,
};
use crate::domain::{Comment, CommentId, News, NewsId, Note, User, UserId};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselNewsRepository, DieselNoteRepository, build_pool,
    run_migrations,
};
use crate::server::{build_app, build_state};

/// Password given to every seeded user.
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// A disposable SQLite database plus the wired HTTP state.
pub struct TestBackend {
    pub state: HttpState,
    pub pool: DbPool,
    // Dropped last; removes the database file.
    _dir: TempDir,
}

impl Default for TestBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBackend {
    /// A migrated database with the default home page cap.
    pub fn new() -> Self {
        Self::with_home_page_len(crate::domain::DEFAULT_NEWS_COUNT_ON_HOME_PAGE)
    }

    /// A migrated database with an explicit home page cap.
    pub fn with_home_page_len(news_count_on_home_page: usize) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db_path = dir.path().join("bulletin-test.sqlite3");
        let pool = build_pool(db_path.to_str().expect("utf-8 temp path")).expect("build pool");
        run_migrations(&pool).expect("run migrations");
        let state = build_state(&pool, news_count_on_home_page);
        Self {
            state,
            pool,
            _dir: dir,
        }
    }

    /// Register a user with [`TEST_PASSWORD`].
    pub async fn seed_user(&self, username: &str) -> User {
        self.state
            .auth
            .sign_up(username, TEST_PASSWORD)
            .await
            .expect("seed user")
    }

    /// Insert a news entry with an explicit date.
    pub async fn seed_news(&self, title: &str, text: &str, date: NaiveDateTime) -> News {
        DieselNewsRepository::new(self.pool.clone())
            .insert(NewNewsRecord {
                title: title.to_owned(),
                text: text.to_owned(),
                date,
            })
            .await
            .expect("seed news")
    }

    /// Insert a comment with an explicit creation time.
    pub async fn seed_comment(
        &self,
        news_id: NewsId,
        author_id: UserId,
        text: &str,
        created: NaiveDateTime,
    ) -> Comment {
        DieselCommentRepository::new(self.pool.clone())
            .insert(NewCommentRecord {
                news_id,
                author_id,
                text: text.to_owned(),
                created,
            })
            .await
            .expect("seed comment")
    }

    /// Insert a note with an explicit slug.
    pub async fn seed_note(
        &self,
        author_id: UserId,
        title: &str,
        text: &str,
        slug: &str,
    ) -> Note {
        DieselNoteRepository::new(self.pool.clone())
            .insert(NewNoteRecord {
                title: title.to_owned(),
                text: text.to_owned(),
                slug: slug.to_owned(),
                author_id,
            })
            .await
            .expect("seed note")
    }

    /// Total number of comments across all news.
    pub fn count_comments(&self) -> usize {
        use diesel::prelude::*;

        use crate::outbound::persistence::schema::comments;

        let mut conn = self.pool.get().expect("pool connection");
        let count: i64 = comments::table
            .count()
            .get_result(&mut conn)
            .expect("count comments");
        usize::try_from(count).expect("non-negative count")
    }

    /// Total number of notes across all users.
    pub fn count_notes(&self) -> usize {
        use diesel::prelude::*;

        use crate::outbound::persistence::schema::notes;

        let mut conn = self.pool.get().expect("pool connection");
        let count: i64 = notes::table
            .count()
            .get_result(&mut conn)
            .expect("count notes");
        usize::try_from(count).expect("non-negative count")
    }

    /// Fetch a comment regardless of ownership.
    pub async fn find_comment(&self, id: CommentId) -> Option<Comment> {
        DieselCommentRepository::new(self.pool.clone())
            .find_by_id(id)
            .await
            .expect("find comment")
    }

    /// Fetch a note by slug regardless of ownership.
    pub async fn find_note(&self, slug: &str) -> Option<Note> {
        DieselNoteRepository::new(self.pool.clone())
            .find_by_slug(slug)
            .await
            .expect("find note")
    }
}

/// Session middleware with an ephemeral key for in-process test apps.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// An initialised in-process application over the backend state.
pub async fn test_app(
    state: HttpState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let health_state = HealthState::new();
    health_state.mark_ready();
    test::init_service(build_app(
        web::Data::new(state),
        web::Data::new(health_state),
        test_session_middleware(),
    ))
    .await
}

/// POST to the login endpoint and return the issued session cookie.
pub async fn login_session<S, B>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": username, "password": TEST_PASSWORD }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert!(
        response.status().is_success(),
        "login failed with status {}",
        response.status()
    );
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie issued")
        .into_owned()
}

/// Deterministic timestamp helper for fixtures.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}
