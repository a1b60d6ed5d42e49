//! Session plumbing shared by HTTP handlers.
//!
//! Wraps the Actix cookie session so handlers deal with domain identities
//! and the login-redirect rule rather than raw session keys. The extractor
//! remembers the requested path, which becomes the `next` target when an
//! unauthenticated request hits a gated endpoint.

use actix_session::Session;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Per-request session wrapper.
#[derive(Clone)]
pub struct SessionContext {
    session: Session,
    path: String,
}

impl SessionContext {
    pub fn new(session: Session, path: impl Into<String>) -> Self {
        Self {
            session,
            path: path.into(),
        }
    }

    /// Persist the authenticated user's id in the session cookie.
    pub fn persist_user(&self, user_id: UserId) -> Result<(), Error> {
        self.session
            .insert(USER_ID_KEY, user_id.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Drop all session state.
    pub fn purge(&self) {
        self.session.purge();
    }

    /// Current user id, if the session carries one.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let id = self
            .session
            .get::<i32>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(id.map(UserId::new))
    }

    /// Authenticated user id, or a redirect-to-login error carrying the
    /// requested path.
    pub fn require_user(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::login_required(self.path.clone()))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let path = req.path().to_owned();
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(|session| SessionContext::new(session, path)) })
    }
}
