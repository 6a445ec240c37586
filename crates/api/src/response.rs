//! Response body types for the books API.
//!
//! Books themselves are returned flat (no envelope); these wrap the few
//! responses that are not a single book.

use bookshelf_db::models::book::Book;
use serde::Serialize;

/// `GET /books` payload.
#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub books: Vec<Book>,
    pub count: usize,
}

impl From<Vec<Book>> for BookListResponse {
    fn from(books: Vec<Book>) -> Self {
        let count = books.len();
        Self { books, count }
    }
}

/// `{ "message": ... }` confirmation payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
