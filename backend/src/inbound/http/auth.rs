//! Authentication endpoints: login, logout, signup.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use serde_json::json;

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{LOGIN_PATH, redirect};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Credentials payload shared by login and signup.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// Render the login form seed.
#[get("/auth/login")]
pub async fn login_form() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "form": { "username": "", "password": "" } }))
}

/// Authenticate and store the user id in the session cookie.
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Json<CredentialsForm>,
) -> ApiResult<HttpResponse> {
    let user_id = state.auth.login(&form.username, &form.password).await?;
    session.persist_user(user_id)?;
    Ok(HttpResponse::Ok().finish())
}

/// Clear the session. Safe for anonymous callers too.
#[get("/auth/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().finish()
}

/// Render the signup form seed.
#[get("/auth/signup")]
pub async fn signup_form() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "form": { "username": "", "password": "" } }))
}

/// Register a new user and point the client at the login form.
#[post("/auth/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    form: web::Json<CredentialsForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    state.auth.sign_up(&form.username, &form.password).await?;
    Ok(redirect(LOGIN_PATH))
}
