//! # Document Service Module
//!
//! Routes the collection-style document API under
//! `/api/collections/{collection}/documents` to its handlers. The client uses
//! it to query crop records by region, to mirror registrations and to delete
//! records chosen in the search screen; the `import` command writes to the
//! same store directly.
//!
//! ## Sub-modules:
//! - `create`: stores a new document under a generated id.
//! - `set`: writes a document under a caller-chosen id.
//! - `query`: lists a collection, filtered by field equality.
//! - `get`: fetches one document.
//! - `delete`: removes one document.

mod create;
mod delete;
mod get;
mod query;
mod set;

use crate::store::StoreError;
use actix_web::web::{delete, get, post, put, scope};
use actix_web::{HttpResponse, Scope};
use log::{error, warn};

/// The base path for all document endpoints.
const API_PATH: &str = "/api/collections/{collection}/documents";

/// Configures and returns the Actix `Scope` for the document routes.
///
/// # Registered Routes:
///
/// *   **`POST /`** (`create::process`): stores the JSON object body, answers
///     `201 Created` with `{ "id": ... }`.
/// *   **`GET /`** (`query::process`): every query parameter becomes an
///     equality filter on the top-level field of the same name.
/// *   **`GET /{id}`** (`get::process`): `200 OK` with `{ "id", "fields" }`,
///     or `404 Not Found`.
/// *   **`PUT /{id}`** (`set::process`): creates or replaces the document.
/// *   **`DELETE /{id}`** (`delete::process`): `204 No Content`, or `404 Not Found`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(query::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(set::process))
        .route("/{id}", delete().to(delete::process))
}

/// Maps a store failure onto the HTTP status the client expects.
fn error_response(err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound { .. } => HttpResponse::NotFound().body(err.to_string()),
        StoreError::NotAnObject | StoreError::EmptyId | StoreError::Json(_) => {
            warn!("Rejected document request: {}", err);
            HttpResponse::BadRequest().body(err.to_string())
        }
        StoreError::Database(_) => {
            error!("Document store unavailable: {}", err);
            HttpResponse::ServiceUnavailable().body(format!("Error accessing documents: {}", err))
        }
    }
}
