//! Repository for the `books` table.
//!
//! Update and delete are single conditional statements, so the existence
//! check and the mutation happen atomically. A missing row is reported as
//! `Ok(None)` / `Ok(false)` rather than an error.

use bookshelf_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::book::{Book, CreateBook, UpdateBook};

/// Column list for `books` queries.
const COLUMNS: &str = "id, title, author, year";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// List every book in insertion (primary key) order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY id");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Find a book by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = ?1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new book, returning the stored row with its assigned ID.
    pub async fn create(pool: &SqlitePool, input: &CreateBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (title, author, year) \
             VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.year)
            .fetch_one(pool)
            .await
    }

    /// Update a book. Only non-`None` fields in `input` are applied.
    ///
    /// An update with no fields returns the row unchanged. Returns `None` if
    /// no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET \
                 title = COALESCE(?2, title), \
                 author = COALESCE(?3, author), \
                 year = COALESCE(?4, year) \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.author.as_deref())
            .bind(input.year)
            .fetch_optional(pool)
            .await
    }

    /// Delete a book by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all books.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(pool)
            .await
    }
}
