//! # Dataset Import
//!
//! Seeds the document store from the bundled reference dataset so the client
//! can run in remote mode against the same crops it ships with.
//!
//! ## Workflow
//!
//! 1.  The dataset file is read and parsed as a region-keyed crop list.
//! 2.  Each entry is converted into a crop document carrying its region as
//!     `prefName`.
//! 3.  The document is upserted under `"<region>-<cropName>"`, so running the
//!     import twice leaves the collection unchanged.

use crate::store::{DocumentStore, StoreError};
use common::dataset::StaticDataset;
use common::error::FetchError;
use log::{debug, info};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read dataset {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid dataset: {0}")]
    Dataset(#[from] FetchError),
    #[error("cannot encode document: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub fn document_id(region_name: &str, crop_name: &str) -> String {
    format!("{}-{}", region_name, crop_name)
}

/// Imports every dataset entry into `collection`, returning how many documents
/// were written.
pub fn run(store: &DocumentStore, dataset_path: &Path, collection: &str) -> Result<usize, ImportError> {
    let raw = fs::read_to_string(dataset_path).map_err(|source| ImportError::Read {
        path: dataset_path.display().to_string(),
        source,
    })?;
    let dataset = StaticDataset::from_json(&raw)?;
    info!(
        "Importing {} entries from {} into '{}'",
        dataset.len(),
        dataset_path.display(),
        collection
    );

    let mut written = 0;
    for (region, entry) in dataset.entries() {
        let id = document_id(region, &entry.name);
        let fields = serde_json::to_value(entry.to_document(region))?;
        store.set(collection, &id, &fields)?;
        debug!("Imported {}", id);
        written += 1;
    }
    Ok(written)
}
