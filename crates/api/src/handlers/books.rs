//! Handlers for the `/books` resource.
//!
//! Each handler maps one HTTP operation onto a single [`BookRepo`] call and
//! renders the result as a flat JSON book (or list/message wrapper).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bookshelf_core::book::{
    BookFields, BOOK_DELETED_MESSAGE, BOOK_ENTITY, INVALID_JSON_MESSAGE, MISSING_FIELDS_MESSAGE,
};
use bookshelf_core::error::CoreError;
use bookshelf_core::types::DbId;
use bookshelf_db::models::book::{CreateBook, UpdateBook};
use bookshelf_db::repositories::BookRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::OptionalJson;
use crate::response::{BookListResponse, MessageResponse};
use crate::state::AppState;

/// GET /books
///
/// List every book with a total count.
pub async fn list_books(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let books = BookRepo::list(&state.pool).await?;

    tracing::info!(count = books.len(), "Listed books");

    Ok(Json(BookListResponse::from(books)))
}

/// GET /books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let book = BookRepo::find_by_id(&state.pool, book_id)
        .await?
        .ok_or_else(|| not_found(book_id))?;

    tracing::info!(book_id, title = %book.title, "Book found");

    Ok(Json(book))
}

/// POST /books
///
/// Create a book from `{title, author, year}`. A missing, null, or mistyped
/// field, or a body that is not JSON, is rejected with 400 and nothing is
/// written.
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<OptionalJson<BookFields>, AppError>,
) -> AppResult<impl IntoResponse> {
    let fields = match payload {
        Ok(OptionalJson(Some(fields))) => fields,
        Ok(OptionalJson(None)) | Err(_) => {
            tracing::warn!("Create book rejected: body missing or not a book object");
            return Err(missing_fields());
        }
    };

    let missing = fields.missing_fields();
    let input = CreateBook::try_from(fields).map_err(|err| {
        tracing::warn!(?missing, "Create book rejected: missing required fields");
        AppError::Core(err)
    })?;

    let book = BookRepo::create(&state.pool, &input).await?;

    tracing::info!(book_id = book.id, title = %book.title, "Book created");

    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /books/{id}
///
/// Apply any subset of `{title, author, year}`. Absent fields are left
/// unchanged; a blank body, or JSON that is not an object, returns the book
/// as stored. A missing book is always 404, whatever the body holds.
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
    payload: Result<OptionalJson<Value>, AppError>,
) -> AppResult<impl IntoResponse> {
    let fields = match payload.and_then(update_fields) {
        Ok(fields) => fields,
        Err(err) => {
            if BookRepo::find_by_id(&state.pool, book_id).await?.is_none() {
                return Err(not_found(book_id));
            }
            return Err(err);
        }
    };
    let input = UpdateBook::from(fields);

    let book = BookRepo::update(&state.pool, book_id, &input)
        .await?
        .ok_or_else(|| not_found(book_id))?;

    if input.is_empty() {
        tracing::info!(book_id, "Update had no recognized fields, book unchanged");
    } else {
        tracing::info!(
            book_id,
            title = %book.title,
            author = %book.author,
            year = book.year,
            "Book updated",
        );
    }

    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BookRepo::delete(&state.pool, book_id).await?;

    if !deleted {
        return Err(not_found(book_id));
    }

    tracing::info!(book_id, "Book deleted");

    Ok(Json(MessageResponse {
        message: BOOK_DELETED_MESSAGE,
    }))
}

fn not_found(id: DbId) -> AppError {
    tracing::warn!(book_id = id, "Book not found");
    AppError::Core(CoreError::NotFound {
        entity: BOOK_ENTITY,
        id,
    })
}

/// Read the update fields out of a PUT body.
///
/// Only a JSON object can carry fields; any other JSON value counts as "no
/// fields". An object whose fields have the wrong types is rejected.
fn update_fields(payload: OptionalJson<Value>) -> AppResult<BookFields> {
    match payload.0 {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).map_err(|err| {
            tracing::warn!(error = %err, "Rejected update body with mistyped fields");
            AppError::BadRequest(INVALID_JSON_MESSAGE.to_string())
        }),
        _ => Ok(BookFields::default()),
    }
}

fn missing_fields() -> AppError {
    AppError::Core(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string()))
}
