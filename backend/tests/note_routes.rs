//! Availability and redirect checks for the notes pages.

use actix_web::http::{StatusCode, header};
use actix_web::test;
use bulletin::test_support::{TestBackend, login_session, test_app};
use rstest::rstest;

#[rstest]
#[case("/notes")]
#[case("/notes/add")]
#[case("/notes/done")]
#[actix_web::test]
async fn gated_pages_open_for_authenticated_users(#[case] path: &str) {
    let backend = TestBackend::new();
    backend.seed_user("Автор").await;
    let app = test_app(backend.state.clone()).await;
    let cookie = login_session(&app, "Автор").await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri(path).cookie(cookie).to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK, "GET {path}");
}

#[rstest]
#[case("", true, StatusCode::OK)]
#[case("/edit", true, StatusCode::OK)]
#[case("/delete", true, StatusCode::OK)]
#[case("", false, StatusCode::NOT_FOUND)]
#[case("/edit", false, StatusCode::NOT_FOUND)]
#[case("/delete", false, StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn note_pages_open_only_for_the_author(
    #[case] suffix: &str,
    #[case] as_author: bool,
    #[case] expected: StatusCode,
) {
    let backend = TestBackend::new();
    let author = backend.seed_user("Автор").await;
    backend.seed_user("Не автор").await;
    let note = backend
        .seed_note(author.id, "Заголовок", "Текст заметки", "note-slug")
        .await;
    let app = test_app(backend.state.clone()).await;

    let username = if as_author { "Автор" } else { "Не автор" };
    let cookie = login_session(&app, username).await;
    let uri = format!("/notes/{}{}", note.slug, suffix);
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri(&uri).cookie(cookie).to_request(),
    )
    .await;

    assert_eq!(response.status(), expected, "GET {uri} as {username}");
}

#[rstest]
#[case("/notes")]
#[case("/notes/add")]
#[case("/notes/done")]
#[case("/notes/note-slug")]
#[case("/notes/note-slug/edit")]
#[case("/notes/note-slug/delete")]
#[actix_web::test]
async fn anonymous_users_are_redirected_to_login(#[case] path: &str) {
    let backend = TestBackend::new();
    let author = backend.seed_user("Автор").await;
    backend
        .seed_note(author.id, "Заголовок", "Текст заметки", "note-slug")
        .await;
    let app = test_app(backend.state.clone()).await;

    let response = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;

    assert_eq!(response.status(), StatusCode::FOUND, "GET {path}");
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header");
    let expected = format!("/auth/login?next={}", path.replace('/', "%2F"));
    assert_eq!(location, expected);
}
