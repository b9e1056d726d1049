//! SQL access for the `authors` table.
//!
//! Functions take a bare connection so callers decide whether they run on a
//! pooled connection or inside a transaction.

use sqlx::SqliteConnection;

use super::models::{Author, CreateAuthor};

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Author>, sqlx::Error> {
    sqlx::query_as::<_, Author>("SELECT id, name, surname, country FROM authors ORDER BY id")
        .fetch_all(conn)
        .await
}

pub async fn find_by_identity(
    conn: &mut SqliteConnection,
    author: &CreateAuthor,
) -> Result<Option<Author>, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        r#"
        SELECT id, name, surname, country
        FROM authors
        WHERE name = ?1 AND surname = ?2 AND country = ?3
        "#,
    )
    .bind(&author.name)
    .bind(&author.surname)
    .bind(&author.country)
    .fetch_optional(conn)
    .await
}

pub async fn exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM authors WHERE id = ?1")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(found.is_some())
}

/// Insert a row and return its new id.
pub async fn insert(conn: &mut SqliteConnection, author: &CreateAuthor) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO authors (name, surname, country) VALUES (?1, ?2, ?3)")
        .bind(&author.name)
        .bind(&author.surname)
        .bind(&author.country)
        .execute(conn)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Number of books referencing the author.
pub async fn count_books(conn: &mut SqliteConnection, id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE author_id = ?1")
        .bind(id)
        .fetch_one(conn)
        .await
}

/// Delete a row; returns whether anything was removed.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM authors WHERE id = ?1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::testing::migrated_db;

    fn orwell() -> CreateAuthor {
        CreateAuthor {
            name: "George".into(),
            surname: "Orwell".into(),
            country: "United Kingdom".into(),
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_identity() {
        let db = migrated_db().await;
        let mut conn = db.acquire().await.unwrap();

        let id = insert(&mut conn, &orwell()).await.unwrap();
        let found = find_by_identity(&mut conn, &orwell()).await.unwrap().unwrap();

        assert_eq!(found.id, id);
        assert!(exists(&mut conn, id).await.unwrap());
        assert_eq!(list(&mut conn).await.unwrap(), vec![found]);
    }

    #[tokio::test]
    async fn identity_lookup_is_exact() {
        let db = migrated_db().await;
        let mut conn = db.acquire().await.unwrap();
        insert(&mut conn, &orwell()).await.unwrap();

        let other_country = CreateAuthor {
            country: "India".into(),
            ..orwell()
        };
        assert!(find_by_identity(&mut conn, &other_country)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn unique_index_rejects_second_insert() {
        let db = migrated_db().await;
        let mut conn = db.acquire().await.unwrap();
        insert(&mut conn, &orwell()).await.unwrap();

        let err = insert(&mut conn, &orwell()).await.unwrap_err();
        assert!(crate::error::is_unique_violation(&err));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let db = migrated_db().await;
        let mut conn = db.acquire().await.unwrap();

        let first = insert(&mut conn, &orwell()).await.unwrap();
        assert!(delete(&mut conn, first).await.unwrap());
        let second = insert(&mut conn, &orwell()).await.unwrap();

        assert!(second > first);
        assert!(!delete(&mut conn, first).await.unwrap());
    }
}
