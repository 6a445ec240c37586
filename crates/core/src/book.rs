//! Book field rules and the fixed client-facing messages of the books API.
//!
//! A book has three client-owned fields (`title`, `author`, `year`) and a
//! store-assigned `id`. Creation requires all three fields; updates accept
//! any subset of them.

use serde::Deserialize;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Entity name used in not-found errors.
pub const BOOK_ENTITY: &str = "Book";

/// Fields a client must supply when creating a book.
pub const REQUIRED_BOOK_FIELDS: &[&str] = &["title", "author", "year"];

/// Error message returned when a create request is incomplete or malformed.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Error message returned when an update body is not a valid update object.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body";

/// Confirmation message returned after a successful delete.
pub const BOOK_DELETED_MESSAGE: &str = "Book deleted successfully";

/* --------------------------------------------------------------------------
Input shape
-------------------------------------------------------------------------- */

/// The three client-owned book fields, each possibly absent.
///
/// JSON `null` deserializes to `None`, so an explicit null is treated the
/// same as an omitted key. Unknown keys (including `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookFields {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
}

impl BookFields {
    /// Names of the required fields that are absent, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.title.is_some(),
            self.author.is_some(),
            self.year.is_some(),
        ];
        REQUIRED_BOOK_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Unwrap all three fields, failing if any is absent.
    pub fn require_all(self) -> Result<(String, String, i64), CoreError> {
        match (self.title, self.author, self.year) {
            (Some(title), Some(author), Some(year)) => Ok((title, author, year)),
            _ => Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full() -> BookFields {
        BookFields {
            title: Some("The Hobbit".to_string()),
            author: Some("J.R.R. Tolkien".to_string()),
            year: Some(1937),
        }
    }

    #[test]
    fn complete_fields_are_accepted() {
        let (title, author, year) = full().require_all().unwrap();
        assert_eq!(title, "The Hobbit");
        assert_eq!(author, "J.R.R. Tolkien");
        assert_eq!(year, 1937);
    }

    #[test]
    fn missing_author_is_rejected() {
        let fields = BookFields {
            author: None,
            ..full()
        };
        assert_eq!(fields.missing_fields(), vec!["author"]);
        assert_matches!(
            fields.require_all(),
            Err(CoreError::Validation(msg)) if msg == MISSING_FIELDS_MESSAGE
        );
    }

    #[test]
    fn empty_fields_report_everything_missing() {
        let fields = BookFields::default();
        assert_eq!(fields.missing_fields(), REQUIRED_BOOK_FIELDS.to_vec());
    }

    #[test]
    fn null_values_deserialize_as_absent() {
        let fields: BookFields =
            serde_json::from_str(r#"{"title": null, "year": 1901, "id": 99}"#).unwrap();
        assert_eq!(fields.title, None);
        assert_eq!(fields.year, Some(1901));
    }

    #[test]
    fn wrong_field_type_fails_to_deserialize() {
        let result = serde_json::from_str::<BookFields>(r#"{"year": "nineteen"}"#);
        assert!(result.is_err());
    }
}
