//! # Document Query Service
//!
//! Backend logic for `GET /api/collections/{collection}/documents`.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: every query parameter is read as a `field=value` pair,
//!     e.g. `?prefName=新潟県`.
//! 2.  **Filtering**: the store returns the documents whose top-level fields equal
//!     all the given values. Without parameters the whole collection is listed.
//! 3.  **HTTP Response**: `200 OK` with a JSON array of `{ "id", "fields" }` in
//!     insertion order.

use super::error_response;
use crate::store::DocumentStore;
use actix_web::{web, HttpResponse, Responder};
use log::debug;
use std::collections::BTreeMap;

pub async fn process(
    store: web::Data<DocumentStore>,
    collection: web::Path<String>,
    filters: web::Query<BTreeMap<String, String>>,
) -> impl Responder {
    match store.query(&collection, &filters) {
        Ok(documents) => {
            debug!(
                "Query on {} with {:?} matched {} documents",
                collection.as_str(),
                filters.0,
                documents.len()
            );
            HttpResponse::Ok().json(documents)
        }
        Err(e) => error_response(e),
    }
}
