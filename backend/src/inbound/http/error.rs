//! HTTP mapping for domain errors.
//!
//! Keeps the domain error type transport agnostic: handlers return
//! [`ApiResult`] and this module decides status codes, redirect targets, and
//! JSON bodies. A missing session never produces an error body, only a
//! redirect to the login form carrying the original path.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use tracing::error;

use crate::domain::Error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Path of the login form; unauthenticated requests are redirected here.
pub const LOGIN_PATH: &str = "/auth/login";

/// Build the login redirect target carrying the original path.
pub fn login_redirect_target(next: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("next", next)
        .finish();
    format!("{LOGIN_PATH}?{query}")
}

/// Plain 302 redirect response.
pub(crate) fn redirect(target: impl AsRef<str>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, target.as_ref().to_owned()))
        .finish()
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::LoginRequired { .. } => StatusCode::FOUND,
            Error::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Error::LoginRequired { next } => redirect(login_redirect_target(next)),
            Error::Validation { field, message } => HttpResponse::BadRequest().json(json!({
                "code": self.code(),
                "field": field,
                "message": message,
            })),
            Error::Internal { message } => {
                // Log the cause; clients only see a redacted payload.
                error!(%message, "internal error reached the HTTP boundary");
                HttpResponse::InternalServerError().json(json!({
                    "code": self.code(),
                    "message": "internal server error",
                }))
            }
            Error::Unauthorized { message } | Error::NotFound { message } => {
                HttpResponse::build(self.status_code()).json(json!({
                    "code": self.code(),
                    "message": message,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn login_redirect_encodes_the_next_path() {
        assert_eq!(
            login_redirect_target("/notes/add"),
            "/auth/login?next=%2Fnotes%2Fadd"
        );
    }

    #[rstest]
    #[case(Error::validation("text", "nope"), StatusCode::BAD_REQUEST)]
    #[case(Error::login_required("/notes"), StatusCode::FOUND)]
    #[case(Error::unauthorized("bad credentials"), StatusCode::UNAUTHORIZED)]
    #[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn statuses_follow_the_taxonomy(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[test]
    fn login_required_responses_redirect_without_a_body() {
        let response = Error::login_required("/notes/add").error_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .expect("location header");
        assert_eq!(location, "/auth/login?next=%2Fnotes%2Fadd");
    }
}
