//! Domain errors raised by the catalog handlers.

use shelf_http::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("This author already exists")]
    DuplicateAuthor,

    /// A book referenced an author id with no live row.
    #[error("Author does not exist")]
    UnknownAuthor { author_id: i64 },

    #[error("Author with id {id} not found")]
    AuthorNotFound { id: i64 },

    #[error("Book with id {id} not found")]
    BookNotFound { id: i64 },

    #[error("Author with id {id} still has {books} book(s)")]
    AuthorHasBooks { id: i64, books: i64 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CatalogError {
    /// Machine-readable code reported alongside the detail message.
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::DuplicateAuthor => "duplicate_entity",
            CatalogError::UnknownAuthor { .. } => "referential_integrity_violation",
            CatalogError::AuthorNotFound { .. } | CatalogError::BookNotFound { .. } => "not_found",
            CatalogError::AuthorHasBooks { .. } => "author_has_books",
            CatalogError::Database(_) => "internal_error",
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let code = err.code();
        match err {
            CatalogError::DuplicateAuthor => AppError::bad_request(err.to_string()).with_code(code),
            CatalogError::UnknownAuthor { author_id } => AppError::bad_request(err.to_string())
                .with_code(code)
                .with_details(vec![serde_json::json!({ "author_id": author_id })]),
            CatalogError::AuthorNotFound { .. } | CatalogError::BookNotFound { .. } => {
                AppError::not_found(err.to_string()).with_code(code)
            }
            CatalogError::AuthorHasBooks { id, books } => AppError::conflict(
                vec![serde_json::json!({ "author_id": id, "books": books })],
                err.to_string(),
            )
            .with_code(code),
            CatalogError::Database(e) => AppError::Internal(e.into()),
        }
    }
}

/// True when `err` is a SQLite unique-constraint failure.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// True when `err` is a SQLite foreign-key failure.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}
