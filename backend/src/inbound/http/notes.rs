//! Note CRUD endpoints, scoped to the session owner.
//!
//! Every endpoint requires a session; detail, edit, and delete additionally
//! require ownership and answer 404 to anyone else. Successful writes
//! redirect to the done page, mirroring the post/redirect/get flow.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Note, NoteDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::redirect;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Path of the page shown after a successful note write.
pub const NOTES_DONE_PATH: &str = "/notes/done";

/// Form payload for note create and edit. An absent or empty slug means
/// "derive one from the title".
#[derive(Debug, Deserialize)]
pub struct NoteForm {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl From<NoteForm> for NoteDraft {
    fn from(form: NoteForm) -> Self {
        Self {
            title: form.title,
            text: form.text,
            slug: form.slug,
        }
    }
}

/// Seed values for the add/edit form pages.
#[derive(Debug, Default, Serialize)]
pub struct NoteFormSeed {
    pub title: String,
    pub text: String,
    pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct NoteListPage {
    pub items: Vec<Note>,
}

#[derive(Debug, Serialize)]
pub struct NoteFormPage {
    pub form: NoteFormSeed,
}

#[get("/notes")]
pub async fn list(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<NoteListPage>> {
    let owner = session.require_user()?;
    let items = state.notes.list(owner).await?;
    Ok(web::Json(NoteListPage { items }))
}

#[get("/notes/add")]
pub async fn add_form(session: SessionContext) -> ApiResult<web::Json<NoteFormPage>> {
    session.require_user()?;
    Ok(web::Json(NoteFormPage {
        form: NoteFormSeed::default(),
    }))
}

#[post("/notes/add")]
pub async fn add(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Json<NoteForm>,
) -> ApiResult<HttpResponse> {
    let owner = session.require_user()?;
    state.notes.create(owner, form.into_inner().into()).await?;
    Ok(redirect(NOTES_DONE_PATH))
}

#[get("/notes/done")]
pub async fn done(session: SessionContext) -> ApiResult<HttpResponse> {
    session.require_user()?;
    Ok(HttpResponse::Ok().json(json!({ "message": "saved" })))
}

#[get("/notes/{slug}")]
pub async fn detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    session: SessionContext,
) -> ApiResult<web::Json<Note>> {
    let owner = session.require_user()?;
    let note = state.notes.fetch_owned(&path.into_inner(), owner).await?;
    Ok(web::Json(note))
}

#[get("/notes/{slug}/edit")]
pub async fn edit_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    session: SessionContext,
) -> ApiResult<web::Json<NoteFormPage>> {
    let owner = session.require_user()?;
    let note = state.notes.fetch_owned(&path.into_inner(), owner).await?;
    Ok(web::Json(NoteFormPage {
        form: NoteFormSeed {
            title: note.title,
            text: note.text,
            slug: note.slug,
        },
    }))
}

#[post("/notes/{slug}/edit")]
pub async fn edit(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    session: SessionContext,
    form: web::Json<NoteForm>,
) -> ApiResult<HttpResponse> {
    let owner = session.require_user()?;
    state
        .notes
        .update(&path.into_inner(), owner, form.into_inner().into())
        .await?;
    Ok(redirect(NOTES_DONE_PATH))
}

#[get("/notes/{slug}/delete")]
pub async fn delete_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    session: SessionContext,
) -> ApiResult<web::Json<Note>> {
    let owner = session.require_user()?;
    let note = state.notes.fetch_owned(&path.into_inner(), owner).await?;
    Ok(web::Json(note))
}

#[post("/notes/{slug}/delete")]
pub async fn delete(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let owner = session.require_user()?;
    state.notes.delete(&path.into_inner(), owner).await?;
    Ok(redirect(NOTES_DONE_PATH))
}
