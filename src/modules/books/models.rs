use serde::{Deserialize, Serialize};
use shelf_http::error::AppError;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::modules::FieldErrors;

/// A stored book row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// System-assigned identifier, never reused
    pub id: i64,
    /// Title of the book
    pub title: String,
    /// Identifier of the owning author
    pub author_id: i64,
    /// Year of first publication
    pub published_year: i32,
}

/// Request body for creating a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateBook {
    /// Title of the book
    pub title: String,
    /// Identifier of an existing author
    pub author_id: i64,
    /// Year of first publication
    pub published_year: i32,
}

impl CreateBook {
    pub fn validated(self) -> Result<Self, AppError> {
        let mut errors = FieldErrors::default();
        errors.require_text("title", &self.title);
        errors.finish("book payload is invalid")?;

        Ok(Self {
            title: self.title.trim().to_string(),
            ..self
        })
    }
}
