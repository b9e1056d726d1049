//! Book operations with the author reference check.

use shelf_db::Database;

use super::models::{Book, CreateBook};
use super::repository;
use crate::error::{is_foreign_key_violation, CatalogError};
use crate::modules::authors::repository as authors;

/// Insert a book whose `author_id` names a live author.
///
/// The foreign key backs up the explicit check when an author disappears
/// between the lookup and the insert.
pub async fn create(db: &Database, book: CreateBook) -> Result<Book, CatalogError> {
    let mut tx = db.begin_write().await?;

    if !authors::exists(&mut tx, book.author_id).await? {
        tracing::info!(author_id = book.author_id, "book rejected: unknown author");
        return Err(CatalogError::UnknownAuthor {
            author_id: book.author_id,
        });
    }

    let id = repository::insert(&mut tx, &book).await.map_err(|e| {
        if is_foreign_key_violation(&e) {
            CatalogError::UnknownAuthor {
                author_id: book.author_id,
            }
        } else {
            CatalogError::Database(e)
        }
    })?;

    tx.commit().await?;
    tracing::info!(book_id = id, author_id = book.author_id, "book created");

    Ok(Book {
        id,
        title: book.title,
        author_id: book.author_id,
        published_year: book.published_year,
    })
}

pub async fn list(db: &Database) -> Result<Vec<Book>, CatalogError> {
    let mut conn = db.acquire().await?;
    Ok(repository::list(&mut conn).await?)
}

pub async fn delete(db: &Database, id: i64) -> Result<(), CatalogError> {
    let mut conn = db.acquire().await?;

    if !repository::delete(&mut conn, id).await? {
        return Err(CatalogError::BookNotFound { id });
    }

    tracing::info!(book_id = id, "book deleted");
    Ok(())
}
