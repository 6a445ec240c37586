//! Book model and DTOs.

use bookshelf_core::book::BookFields;
use bookshelf_core::error::CoreError;
use bookshelf_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `books` table.
///
/// Serializes to the flat wire shape `{"id", "title", "author", "year"}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub year: i64,
}

/// DTO for inserting a new book. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl TryFrom<BookFields> for CreateBook {
    type Error = CoreError;

    fn try_from(fields: BookFields) -> Result<Self, Self::Error> {
        let (title, author, year) = fields.require_all()?;
        Ok(Self {
            title,
            author,
            year,
        })
    }
}

/// DTO for a partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
}

impl UpdateBook {
    /// True when the update would not change any column.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none()
    }
}

impl From<BookFields> for UpdateBook {
    fn from(fields: BookFields) -> Self {
        Self {
            title: fields.title,
            author: fields.author,
            year: fields.year,
        }
    }
}
