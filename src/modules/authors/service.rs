//! Author operations with their duplicate and dependency rules.

use shelf_db::Database;

use super::models::{Author, CreateAuthor};
use super::repository;
use crate::error::{is_foreign_key_violation, is_unique_violation, CatalogError};

/// Insert a new author unless an identical (name, surname, country) row exists.
///
/// The lookup and the insert share one write transaction, so concurrent
/// creates queue on the database lock; the unique index still backs it up.
pub async fn create(db: &Database, author: CreateAuthor) -> Result<Author, CatalogError> {
    let mut tx = db.begin_write().await?;

    if let Some(existing) = repository::find_by_identity(&mut tx, &author).await? {
        tracing::info!(author_id = existing.id, "duplicate author rejected");
        return Err(CatalogError::DuplicateAuthor);
    }

    let id = repository::insert(&mut tx, &author)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                CatalogError::DuplicateAuthor
            } else {
                CatalogError::Database(e)
            }
        })?;

    tx.commit().await?;
    tracing::info!(author_id = id, "author created");

    Ok(Author {
        id,
        name: author.name,
        surname: author.surname,
        country: author.country,
    })
}

pub async fn list(db: &Database) -> Result<Vec<Author>, CatalogError> {
    let mut conn = db.acquire().await?;
    Ok(repository::list(&mut conn).await?)
}

/// Delete an author that owns no books.
pub async fn delete(db: &Database, id: i64) -> Result<(), CatalogError> {
    let mut tx = db.begin_write().await?;

    if !repository::exists(&mut tx, id).await? {
        return Err(CatalogError::AuthorNotFound { id });
    }

    let books = repository::count_books(&mut tx, id).await?;
    if books > 0 {
        return Err(CatalogError::AuthorHasBooks { id, books });
    }

    match repository::delete(&mut tx, id).await {
        Ok(true) => {}
        Ok(false) => return Err(CatalogError::AuthorNotFound { id }),
        Err(e) if is_foreign_key_violation(&e) => {
            let books = repository::count_books(&mut tx, id).await?;
            return Err(CatalogError::AuthorHasBooks { id, books });
        }
        Err(e) => return Err(e.into()),
    }

    tx.commit().await?;
    tracing::info!(author_id = id, "author deleted");
    Ok(())
}
