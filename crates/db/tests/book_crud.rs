//! Integration tests for `BookRepo` against a fresh SQLite database per test.

use assert_matches::assert_matches;
use bookshelf_db::models::book::{CreateBook, UpdateBook};
use bookshelf_db::repositories::BookRepo;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_book(title: &str, author: &str, year: i64) -> CreateBook {
    CreateBook {
        title: title.to_string(),
        author: author.to_string(),
        year,
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrator = "bookshelf_db::MIGRATOR")]
async fn test_create_then_find_round_trip(pool: SqlitePool) {
    let created = BookRepo::create(&pool, &new_book("The Hobbit", "J.R.R. Tolkien", 1937))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "The Hobbit");

    let found = BookRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrator = "bookshelf_db::MIGRATOR")]
async fn test_find_missing_returns_none(pool: SqlitePool) {
    let found = BookRepo::find_by_id(&pool, 404).await.unwrap();
    assert_matches!(found, None);
}

#[sqlx::test(migrator = "bookshelf_db::MIGRATOR")]
async fn test_list_returns_insertion_order_and_allows_duplicates(pool: SqlitePool) {
    let a = BookRepo::create(&pool, &new_book("Dune", "Frank Herbert", 1965))
        .await
        .unwrap();
    let b = BookRepo::create(&pool, &new_book("Dune", "Frank Herbert", 1965))
        .await
        .unwrap();
    assert_ne!(a.id, b.id);

    let books = BookRepo::list(&pool).await.unwrap();
    assert_eq!(books, vec![a, b]);
    assert_eq!(BookRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrator = "bookshelf_db::MIGRATOR")]
async fn test_list_empty_store(pool: SqlitePool) {
    assert!(BookRepo::list(&pool).await.unwrap().is_empty());
    assert_eq!(BookRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrator = "bookshelf_db::MIGRATOR")]
async fn test_partial_update_preserves_untouched_fields(pool: SqlitePool) {
    let book = BookRepo::create(&pool, &new_book("A", "B", 1900))
        .await
        .unwrap();

    let patch = UpdateBook {
        year: Some(1901),
        ..Default::default()
    };
    let updated = BookRepo::update(&pool, book.id, &patch)
        .await
        .unwrap()
        .expect("book should exist");

    assert_eq!(updated.id, book.id);
    assert_eq!(updated.title, "A");
    assert_eq!(updated.author, "B");
    assert_eq!(updated.year, 1901);
}

#[sqlx::test(migrator = "bookshelf_db::MIGRATOR")]
async fn test_empty_update_returns_row_unchanged(pool: SqlitePool) {
    let book = BookRepo::create(&pool, &new_book("Emma", "Jane Austen", 1815))
        .await
        .unwrap();

    let updated = BookRepo::update(&pool, book.id, &UpdateBook::default())
        .await
        .unwrap();
    assert_eq!(updated, Some(book));
}

#[sqlx::test(migrator = "bookshelf_db::MIGRATOR")]
async fn test_update_missing_returns_none(pool: SqlitePool) {
    let patch = UpdateBook {
        title: Some("Ghost".to_string()),
        ..Default::default()
    };
    let updated = BookRepo::update(&pool, 99, &patch).await.unwrap();
    assert_matches!(updated, None);
    assert_eq!(BookRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrator = "bookshelf_db::MIGRATOR")]
async fn test_delete_removes_row(pool: SqlitePool) {
    let book = BookRepo::create(&pool, &new_book("Ulysses", "James Joyce", 1922))
        .await
        .unwrap();

    assert!(BookRepo::delete(&pool, book.id).await.unwrap());
    assert_matches!(BookRepo::find_by_id(&pool, book.id).await.unwrap(), None);

    // Second delete finds nothing.
    assert!(!BookRepo::delete(&pool, book.id).await.unwrap());
}

#[sqlx::test(migrator = "bookshelf_db::MIGRATOR")]
async fn test_deleted_id_is_not_reused(pool: SqlitePool) {
    let first = BookRepo::create(&pool, &new_book("One", "X", 2001))
        .await
        .unwrap();
    BookRepo::delete(&pool, first.id).await.unwrap();

    let second = BookRepo::create(&pool, &new_book("Two", "Y", 2002))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrator = "bookshelf_db::MIGRATOR")]
async fn test_null_title_violates_not_null(pool: SqlitePool) {
    let result = sqlx::query("INSERT INTO books (title, author, year) VALUES (NULL, 'A', 1)")
        .execute(&pool)
        .await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}
