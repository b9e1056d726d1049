//! SQL access for the `books` table.

use sqlx::SqliteConnection;

use super::models::{Book, CreateBook};

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        "SELECT id, title, author_id, published_year FROM books ORDER BY id",
    )
    .fetch_all(conn)
    .await
}

/// Insert a row and return its new id. Fails on an unknown `author_id`.
pub async fn insert(conn: &mut SqliteConnection, book: &CreateBook) -> Result<i64, sqlx::Error> {
    let result =
        sqlx::query("INSERT INTO books (title, author_id, published_year) VALUES (?1, ?2, ?3)")
            .bind(&book.title)
            .bind(book.author_id)
            .bind(book.published_year)
            .execute(conn)
            .await?;
    Ok(result.last_insert_rowid())
}

/// Delete a row; returns whether anything was removed.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM books WHERE id = ?1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
