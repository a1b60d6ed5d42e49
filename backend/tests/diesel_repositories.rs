//! Adapter-level contract checks for the Diesel repositories.

use bulletin::domain::ports::{
    CommentRepository, NewCommentRecord, NewNoteRecord, NewsRepository, NoteChanges,
    NoteRepository, StoreError, UserRepository,
};
use bulletin::test_support::{TestBackend, at};
use bulletin::outbound::persistence::{
    DieselCommentRepository, DieselNewsRepository, DieselNoteRepository, DieselUserRepository,
};
use chrono::Duration;

#[tokio::test]
async fn list_recent_orders_and_caps() {
    let backend = TestBackend::new();
    let repo = DieselNewsRepository::new(backend.pool.clone());
    let today = at(2026, 4, 1, 9);
    for offset in [1_i64, 4, 0, 3, 2] {
        backend
            .seed_news(
                &format!("Новость {offset}"),
                "Просто текст",
                today - Duration::days(offset),
            )
            .await;
    }

    let listed = repo.list_recent(3).await.expect("list recent");

    assert_eq!(listed.len(), 3);
    let dates: Vec<_> = listed.iter().map(|news| news.date).collect();
    assert_eq!(
        dates,
        vec![today, today - Duration::days(1), today - Duration::days(2)]
    );
}

#[tokio::test]
async fn comments_list_in_creation_order() {
    let backend = TestBackend::new();
    let repo = DieselCommentRepository::new(backend.pool.clone());
    let author = backend.seed_user("Автор").await;
    let news = backend
        .seed_news("Заголовок", "Текст заметки", at(2026, 4, 1, 9))
        .await;
    let base = at(2026, 4, 2, 9);
    for offset in [2_i64, 0, 1] {
        repo.insert(NewCommentRecord {
            news_id: news.id,
            author_id: author.id,
            text: format!("Текст {offset}"),
            created: base + Duration::days(offset),
        })
        .await
        .expect("insert comment");
    }

    let listed = repo.list_for_news(news.id).await.expect("list comments");

    let created: Vec<_> = listed.iter().map(|comment| comment.created).collect();
    assert_eq!(
        created,
        vec![base, base + Duration::days(1), base + Duration::days(2)]
    );
}

#[tokio::test]
async fn duplicate_note_slugs_conflict() {
    let backend = TestBackend::new();
    let repo = DieselNoteRepository::new(backend.pool.clone());
    let author = backend.seed_user("Автор").await;
    backend
        .seed_note(author.id, "Заголовок", "Текст заметки", "note-slug")
        .await;

    let error = repo
        .insert(NewNoteRecord {
            title: "Другой заголовок".to_owned(),
            text: "Другой текст".to_owned(),
            slug: "note-slug".to_owned(),
            author_id: author.id,
        })
        .await
        .expect_err("slug is taken");

    assert!(matches!(error, StoreError::Conflict { .. }), "{error:?}");
}

#[tokio::test]
async fn note_updates_replace_all_mutable_columns() {
    let backend = TestBackend::new();
    let repo = DieselNoteRepository::new(backend.pool.clone());
    let author = backend.seed_user("Автор").await;
    let note = backend
        .seed_note(author.id, "Заголовок", "Текст заметки", "note-slug")
        .await;

    let updated = repo
        .update(
            note.id,
            NoteChanges {
                title: "Новый заголовок".to_owned(),
                text: "Новый текст".to_owned(),
                slug: "new-slug".to_owned(),
            },
        )
        .await
        .expect("update note");

    assert_eq!(updated.id, note.id);
    assert_eq!(updated.slug, "new-slug");
    assert!(backend.find_note("note-slug").await.is_none());

    repo.delete(note.id).await.expect("delete note");
    assert!(backend.find_note("new-slug").await.is_none());
}

#[tokio::test]
async fn duplicate_usernames_conflict() {
    let backend = TestBackend::new();
    backend.seed_user("Автор").await;

    let error = backend
        .state
        .auth
        .sign_up("Автор", "another password")
        .await
        .expect_err("username is taken");

    assert_eq!(
        error,
        bulletin::domain::Error::validation(
            "username",
            bulletin::domain::auth_service::USERNAME_TAKEN_WARNING
        )
    );
}

#[tokio::test]
async fn credentials_round_trip_through_the_store() {
    let backend = TestBackend::new();
    let user = backend.seed_user("Автор").await;
    let repo = DieselUserRepository::new(backend.pool.clone());

    let credentials = repo
        .credentials_by_username("Автор")
        .await
        .expect("query credentials")
        .expect("user present");

    assert_eq!(credentials.id, user.id);
    // Digests are salted, never the raw password.
    assert!(!credentials.password_digest.contains("correct horse"));

    let missing = repo
        .credentials_by_username("Некто")
        .await
        .expect("query credentials");
    assert!(missing.is_none());
}
