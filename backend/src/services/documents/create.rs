//! # Document Creation Service
//!
//! Backend logic for `POST /api/collections/{collection}/documents`.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives the collection name from the path and
//!     the document fields as a JSON body.
//! 2.  **Persistence**: the fields are stored under a freshly generated UUID.
//! 3.  **HTTP Response**: `201 Created` with `{ "id": ... }`. A body that is not a
//!     JSON object yields `400 Bad Request`.

use super::error_response;
use crate::store::{DocumentStore, StoreError};
use actix_web::{web, HttpResponse, Responder};
use common::model::document::CreatedDocument;
use log::debug;
use serde_json::Value;

pub async fn process(
    store: web::Data<DocumentStore>,
    collection: web::Path<String>,
    body: web::Json<Value>,
) -> impl Responder {
    match create_document(&store, &collection, &body) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(e) => error_response(e),
    }
}

fn create_document(
    store: &DocumentStore,
    collection: &str,
    fields: &Value,
) -> Result<CreatedDocument, StoreError> {
    let id = store.create(collection, fields)?;
    debug!("Created document {}/{}", collection, id);
    Ok(CreatedDocument { id })
}
