//! # Document Upsert Service
//!
//! Backend logic for `PUT /api/collections/{collection}/documents/{id}`. The
//! document is created when the id is unknown and its fields replaced otherwise,
//! which makes repeated writes under a deterministic id idempotent.

use super::error_response;
use crate::store::DocumentStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::document::CreatedDocument;
use serde_json::Value;

pub async fn process(
    store: web::Data<DocumentStore>,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
) -> impl Responder {
    let (collection, id) = path.into_inner();
    match store.set(&collection, &id, &body) {
        Ok(()) => HttpResponse::Ok().json(CreatedDocument { id }),
        Err(e) => error_response(e),
    }
}
