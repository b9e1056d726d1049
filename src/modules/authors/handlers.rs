use axum::{extract::State, Json};
use shelf_db::Database;
use shelf_http::{
    error::AppError,
    extract::{AppJson, AppPath},
};

use super::models::{Author, CreateAuthor};
use super::service;
use crate::modules::MessageResponse;

/// POST /authors/
pub async fn create_author(
    State(db): State<Database>,
    AppJson(payload): AppJson<CreateAuthor>,
) -> Result<Json<MessageResponse>, AppError> {
    let author = service::create(&db, payload.validated()?).await?;

    Ok(Json(MessageResponse::new(format!(
        "{} {} from {} (id {}) was added to authors.",
        author.name, author.surname, author.country, author.id
    ))))
}

/// GET /authors/
pub async fn list_authors(State(db): State<Database>) -> Result<Json<Vec<Author>>, AppError> {
    Ok(Json(service::list(&db).await?))
}

/// DELETE /authors/{author_id}
pub async fn delete_author(
    State(db): State<Database>,
    AppPath(author_id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    service::delete(&db, author_id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Author with id {author_id} is deleted."
    ))))
}
