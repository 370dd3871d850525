//! # Document Deletion Service
//!
//! Backend logic for `DELETE /api/collections/{collection}/documents/{id}`.
//! Answers `204 No Content` once the document is gone and `404 Not Found` when
//! there was nothing to delete, so the client can report per-record failures.

use super::error_response;
use crate::store::DocumentStore;
use actix_web::{web, HttpResponse, Responder};
use log::info;

pub async fn process(
    store: web::Data<DocumentStore>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (collection, id) = path.into_inner();
    match store.delete(&collection, &id) {
        Ok(()) => {
            info!("Deleted document {}/{}", collection, id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => error_response(e),
    }
}
