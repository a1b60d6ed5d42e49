//! News feed and comment endpoints.
//!
//! The home and detail pages are public. Comment submission and mutation
//! require a session; edit and delete additionally require authorship and
//! answer 404 to anyone else.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Comment, CommentId, News, NewsId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::redirect;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Home page payload: the newest entries, capped by configuration.
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub items: Vec<News>,
}

/// Seed values for the comment form shown to authenticated readers.
#[derive(Debug, Default, Serialize)]
pub struct CommentFormSeed {
    pub text: String,
}

/// Detail page payload. `comment_form` is present only for authenticated
/// readers; anonymous readers get no form at all.
#[derive(Debug, Serialize)]
pub struct DetailPage {
    pub news: News,
    pub comments: Vec<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_form: Option<CommentFormSeed>,
}

/// Edit page payload: the comment plus a prefilled form.
#[derive(Debug, Serialize)]
pub struct CommentEditPage {
    pub comment: Comment,
    pub form: CommentFormSeed,
}

/// Comment text payload for create and edit.
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub text: String,
}

fn detail_comments_anchor(news_id: NewsId) -> String {
    format!("/news/{news_id}#comments")
}

#[get("/news")]
pub async fn home(state: web::Data<HttpState>) -> ApiResult<web::Json<HomePage>> {
    let items = state.news.home_page().await?;
    Ok(web::Json(HomePage { items }))
}

#[get("/news/{id}")]
pub async fn detail(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    session: SessionContext,
) -> ApiResult<web::Json<DetailPage>> {
    let id = NewsId::new(path.into_inner());
    let (news, comments) = state.news.detail(id).await?;
    let comment_form = session.user_id()?.map(|_| CommentFormSeed::default());
    Ok(web::Json(DetailPage {
        news,
        comments,
        comment_form,
    }))
}

#[post("/news/{id}/comments")]
pub async fn comment_create(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    session: SessionContext,
    form: web::Json<CommentForm>,
) -> ApiResult<HttpResponse> {
    let author = session.require_user()?;
    let news_id = NewsId::new(path.into_inner());
    state.comments.create(news_id, author, &form.text).await?;
    Ok(redirect(detail_comments_anchor(news_id)))
}

#[get("/comments/{id}/edit")]
pub async fn comment_edit_form(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    session: SessionContext,
) -> ApiResult<web::Json<CommentEditPage>> {
    let acting = session.require_user()?;
    let comment = state
        .comments
        .fetch_owned(CommentId::new(path.into_inner()), acting)
        .await?;
    let form = CommentFormSeed {
        text: comment.text.clone(),
    };
    Ok(web::Json(CommentEditPage { comment, form }))
}

#[post("/comments/{id}/edit")]
pub async fn comment_edit(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    session: SessionContext,
    form: web::Json<CommentForm>,
) -> ApiResult<HttpResponse> {
    let acting = session.require_user()?;
    let comment = state
        .comments
        .update_text(CommentId::new(path.into_inner()), acting, &form.text)
        .await?;
    Ok(redirect(detail_comments_anchor(comment.news_id)))
}

#[get("/comments/{id}/delete")]
pub async fn comment_delete_form(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    session: SessionContext,
) -> ApiResult<web::Json<Comment>> {
    let acting = session.require_user()?;
    let comment = state
        .comments
        .fetch_owned(CommentId::new(path.into_inner()), acting)
        .await?;
    Ok(web::Json(comment))
}

#[post("/comments/{id}/delete")]
pub async fn comment_delete(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let acting = session.require_user()?;
    let news_id = state
        .comments
        .delete(CommentId::new(path.into_inner()), acting)
        .await?;
    Ok(redirect(detail_comments_anchor(news_id)))
}
