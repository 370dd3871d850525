//! Backend logic for `GET /api/collections/{collection}/documents/{id}`.

use super::error_response;
use crate::store::DocumentStore;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(
    store: web::Data<DocumentStore>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (collection, id) = path.into_inner();
    match store.get(&collection, &id) {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(e) => error_response(e),
    }
}
