use serde::{Deserialize, Serialize};
use shelf_http::error::AppError;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::modules::FieldErrors;

/// A stored author row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    /// System-assigned identifier, never reused
    pub id: i64,
    /// Given name
    pub name: String,
    /// Family name
    pub surname: String,
    /// Country of origin
    pub country: String,
}

/// Request body for creating an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateAuthor {
    /// Given name
    pub name: String,
    /// Family name
    pub surname: String,
    /// Country of origin
    pub country: String,
}

impl CreateAuthor {
    /// Reject blank fields and return the payload with surrounding whitespace removed.
    pub fn validated(self) -> Result<Self, AppError> {
        let mut errors = FieldErrors::default();
        errors.require_text("name", &self.name);
        errors.require_text("surname", &self.surname);
        errors.require_text("country", &self.country);
        errors.finish("author payload is invalid")?;

        Ok(Self {
            name: self.name.trim().to_string(),
            surname: self.surname.trim().to_string(),
            country: self.country.trim().to_string(),
        })
    }
}
