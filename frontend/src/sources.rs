//! Record sources of the client.
//!
//! The source is picked once, when the configuration has loaded: the bundled
//! dataset in local mode, the document store otherwise. Components hold a
//! [`CropSource`] and never look at the mode again.

use crate::config::AppConfig;
use crate::net::decode_json;
use common::dataset::StaticDatasetSource;
use common::error::{FetchError, PersistenceError};
use common::model::crop::CropRecord;
use common::model::document::{
    CropDocument, StoredDocument, VarietyDocument, CROPS_COLLECTION, REGION_FIELD,
    VARIETIES_COLLECTION,
};
use common::model::variety::VarietyRecord;
use common::reconcile::{RecordMirror, RecordSource};
use gloo_net::http::Request;
use serde::Serialize;
use yew::platform::spawn_local;

/// Crop documents served by the document store API.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteStoreSource {
    crops_url: String,
}

impl RemoteStoreSource {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            crops_url: config.collection_url(CROPS_COLLECTION),
        }
    }
}

impl RecordSource for RemoteStoreSource {
    fn is_remote(&self) -> bool {
        true
    }

    async fn query_by_region(&self, region_name: &str) -> Result<Vec<CropRecord>, FetchError> {
        let response = Request::get(&self.crops_url)
            .query([(REGION_FIELD, region_name)])
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let documents: Vec<StoredDocument> = decode_json(response).await?;
        let records = documents
            .into_iter()
            .map(CropRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("{} remote crops for {}", records.len(), region_name);
        Ok(records)
    }

    async fn delete_by_id(&self, document_id: &str) -> Result<(), PersistenceError> {
        let response = Request::delete(&format!("{}/{}", self.crops_url, document_id))
            .send()
            .await
            .map_err(|e| PersistenceError::Request(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(PersistenceError::Status {
                status: response.status(),
                document_id: document_id.to_string(),
            })
        }
    }
}

/// The record source chosen for the session.
#[derive(Debug, Clone)]
pub enum CropSource {
    Static(StaticDatasetSource),
    Remote(RemoteStoreSource),
}

impl PartialEq for CropSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CropSource::Static(a), CropSource::Static(b)) => {
                std::ptr::eq(a.dataset(), b.dataset())
            }
            (CropSource::Remote(a), CropSource::Remote(b)) => a == b,
            _ => false,
        }
    }
}

impl RecordSource for CropSource {
    fn is_remote(&self) -> bool {
        match self {
            CropSource::Static(source) => source.is_remote(),
            CropSource::Remote(source) => source.is_remote(),
        }
    }

    async fn query_by_region(&self, region_name: &str) -> Result<Vec<CropRecord>, FetchError> {
        match self {
            CropSource::Static(source) => source.query_by_region(region_name).await,
            CropSource::Remote(source) => source.query_by_region(region_name).await,
        }
    }

    async fn delete_by_id(&self, document_id: &str) -> Result<(), PersistenceError> {
        match self {
            CropSource::Static(source) => source.delete_by_id(document_id).await,
            CropSource::Remote(source) => source.delete_by_id(document_id).await,
        }
    }
}

/// Mirrors session registrations into the document store without waiting for
/// the result.
pub struct RemoteMirror {
    crops_url: String,
    varieties_url: String,
}

impl RemoteMirror {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            crops_url: config.collection_url(CROPS_COLLECTION),
            varieties_url: config.collection_url(VARIETIES_COLLECTION),
        }
    }
}

impl RecordMirror for RemoteMirror {
    fn mirror_crop(&self, crop: &CropRecord) {
        post_document(self.crops_url.clone(), CropDocument::from_record(crop));
    }

    fn mirror_variety(&self, variety: &VarietyRecord) {
        post_document(self.varieties_url.clone(), VarietyDocument::from(variety));
    }
}

fn post_document<T: Serialize + 'static>(url: String, document: T) {
    spawn_local(async move {
        let request = match Request::post(&url).json(&document) {
            Ok(request) => request,
            Err(e) => {
                log::error!("cannot encode document for {}: {}", url, e);
                return;
            }
        };
        match request.send().await {
            Ok(response) if response.ok() => log::info!("saved document to {}", url),
            Ok(response) => log::error!("saving to {} failed with status {}", url, response.status()),
            Err(e) => log::error!("saving to {} failed: {}", url, e),
        }
    });
}
