//! Note creation, slug resolution, and author-gated mutation.

use actix_web::http::{StatusCode, header};
use actix_web::test;
use bulletin::domain::SLUG_TAKEN_SUFFIX;
use bulletin::test_support::{TestBackend, login_session, test_app};
use serde_json::{Value, json};

fn form_data() -> Value {
    json!({
        "title": "Новый заголовок",
        "text": "Новый текст",
        "slug": "new-slug",
    })
}

fn location_of<B>(response: &actix_web::dev::ServiceResponse<B>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
        .to_owned()
}

#[actix_web::test]
async fn a_user_can_create_a_note() {
    let backend = TestBackend::new();
    let author = backend.seed_user("Автор").await;
    backend.seed_user("Не автор").await;
    backend
        .seed_note(author.id, "Заголовок", "Текст заметки", "note-slug")
        .await;
    let app = test_app(backend.state.clone()).await;
    let cookie = login_session(&app, "Автор").await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/notes/add")
            .cookie(cookie)
            .set_json(form_data())
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location_of(&response), "/notes/done");
    assert_eq!(backend.count_notes(), 2);
    let note = backend.find_note("new-slug").await.expect("note created");
    assert_eq!(note.title, "Новый заголовок");
    assert_eq!(note.text, "Новый текст");
    assert_eq!(note.author_id, author.id);
}

#[actix_web::test]
async fn anonymous_users_cannot_create_notes() {
    let backend = TestBackend::new();
    let author = backend.seed_user("Автор").await;
    backend
        .seed_note(author.id, "Заголовок", "Текст заметки", "note-slug")
        .await;
    let app = test_app(backend.state.clone()).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/notes/add")
            .set_json(form_data())
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location_of(&response), "/auth/login?next=%2Fnotes%2Fadd");
    assert_eq!(backend.count_notes(), 1);
}

#[actix_web::test]
async fn duplicate_slugs_are_rejected() {
    let backend = TestBackend::new();
    let author = backend.seed_user("Автор").await;
    backend
        .seed_note(author.id, "Заголовок", "Текст заметки", "note-slug")
        .await;
    let app = test_app(backend.state.clone()).await;
    let cookie = login_session(&app, "Автор").await;

    let mut payload = form_data();
    payload["slug"] = json!("note-slug");
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/notes/add")
            .cookie(cookie)
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["field"], "slug");
    assert_eq!(body["message"], format!("note-slug{SLUG_TAKEN_SUFFIX}"));
    assert_eq!(backend.count_notes(), 1);
}

#[actix_web::test]
async fn missing_slugs_are_derived_from_the_title() {
    let backend = TestBackend::new();
    backend.seed_user("Автор").await;
    let app = test_app(backend.state.clone()).await;
    let cookie = login_session(&app, "Автор").await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/notes/add")
            .cookie(cookie)
            .set_json(json!({ "title": "Новый заголовок", "text": "Новый текст" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location_of(&response), "/notes/done");
    let note = backend
        .find_note("novyj-zagolovok")
        .await
        .expect("note stored under the transliterated slug");
    assert_eq!(note.title, "Новый заголовок");
}

#[actix_web::test]
async fn the_author_can_edit_their_note() {
    let backend = TestBackend::new();
    let author = backend.seed_user("Автор").await;
    backend
        .seed_note(author.id, "Заголовок", "Текст заметки", "note-slug")
        .await;
    let app = test_app(backend.state.clone()).await;
    let cookie = login_session(&app, "Автор").await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/notes/note-slug/edit")
            .cookie(cookie)
            .set_json(form_data())
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location_of(&response), "/notes/done");
    assert!(backend.find_note("note-slug").await.is_none());
    let note = backend.find_note("new-slug").await.expect("renamed note");
    assert_eq!(note.title, "Новый заголовок");
    assert_eq!(note.text, "Новый текст");
}

#[actix_web::test]
async fn other_users_cannot_edit_notes() {
    let backend = TestBackend::new();
    let author = backend.seed_user("Автор").await;
    backend.seed_user("Не автор").await;
    backend
        .seed_note(author.id, "Заголовок", "Текст заметки", "note-slug")
        .await;
    let app = test_app(backend.state.clone()).await;
    let cookie = login_session(&app, "Не автор").await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/notes/note-slug/edit")
            .cookie(cookie)
            .set_json(form_data())
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let note = backend.find_note("note-slug").await.expect("note kept");
    assert_eq!(note.title, "Заголовок");
    assert_eq!(note.text, "Текст заметки");
}

#[actix_web::test]
async fn the_author_can_delete_their_note() {
    let backend = TestBackend::new();
    let author = backend.seed_user("Автор").await;
    backend
        .seed_note(author.id, "Заголовок", "Текст заметки", "note-slug")
        .await;
    let app = test_app(backend.state.clone()).await;
    let cookie = login_session(&app, "Автор").await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/notes/note-slug/delete")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location_of(&response), "/notes/done");
    assert_eq!(backend.count_notes(), 0);
}

#[actix_web::test]
async fn other_users_cannot_delete_notes() {
    let backend = TestBackend::new();
    let author = backend.seed_user("Автор").await;
    backend.seed_user("Не автор").await;
    backend
        .seed_note(author.id, "Заголовок", "Текст заметки", "note-slug")
        .await;
    let app = test_app(backend.state.clone()).await;
    let cookie = login_session(&app, "Не автор").await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/notes/note-slug/delete")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(backend.count_notes(), 1);
}

#[actix_web::test]
async fn signup_then_login_creates_a_working_session() {
    let backend = TestBackend::new();
    let app = test_app(backend.state.clone()).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/signup")
            .set_json(json!({
                "username": "Автор",
                "password": bulletin::test_support::TEST_PASSWORD,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location_of(&response), "/auth/login");

    let cookie = login_session(&app, "Автор").await;
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/notes").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
