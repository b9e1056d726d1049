use axum::{extract::State, Json};
use shelf_db::Database;
use shelf_http::{
    error::AppError,
    extract::{AppJson, AppPath},
};

use super::models::{Book, CreateBook};
use super::service;
use crate::modules::MessageResponse;

/// POST /books/
pub async fn create_book(
    State(db): State<Database>,
    AppJson(payload): AppJson<CreateBook>,
) -> Result<Json<MessageResponse>, AppError> {
    let book = service::create(&db, payload.validated()?).await?;

    Ok(Json(MessageResponse::new(format!(
        "The following book was created: {}.",
        book.title
    ))))
}

/// GET /books/
pub async fn list_books(State(db): State<Database>) -> Result<Json<Vec<Book>>, AppError> {
    Ok(Json(service::list(&db).await?))
}

/// DELETE /books/{book_id}
pub async fn delete_book(
    State(db): State<Database>,
    AppPath(book_id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    service::delete(&db, book_id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Book with id {book_id} is deleted."
    ))))
}
