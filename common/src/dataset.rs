//! The bundled, region-keyed reference dataset (`cropsData.json`).
//!
//! The file maps a region name to an ordered list of crop entries. It is parsed
//! once, when the client starts or the import command runs, and never changes
//! afterwards. [`StaticDatasetSource`] exposes it as a [`RecordSource`].

use crate::error::{FetchError, PersistenceError};
use crate::model::crop::{normalize_field, CropRecord, RecordOrigin};
use crate::model::document::{CropDocument, Schedule};
use crate::reconcile::source::RecordSource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One crop entry of the dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetEntry {
    pub name: String,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub has_detail: Option<bool>,
    #[serde(default)]
    pub variety: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub sowing: Option<Schedule>,
    #[serde(default)]
    pub nursery: Option<String>,
    #[serde(default)]
    pub harvest: Option<Schedule>,
}

impl DatasetEntry {
    pub fn to_record(&self, region_name: &str) -> CropRecord {
        CropRecord {
            region_name: region_name.to_string(),
            crop_name: self.name.clone(),
            season: normalize_field(self.season.as_deref().unwrap_or_default()),
            category: normalize_field(self.category.as_deref().unwrap_or_default()),
            has_detail: self.has_detail.unwrap_or(false),
            sowing_range: self.sowing.as_ref().and_then(Schedule::range),
            harvest_range: self.harvest.as_ref().and_then(Schedule::range),
            document_id: None,
            origin: RecordOrigin::Static,
        }
    }

    /// The document the import command writes for this entry.
    pub fn to_document(&self, region_name: &str) -> CropDocument {
        CropDocument {
            pref_name: region_name.to_string(),
            crop_name: self.name.clone(),
            season: Some(normalize_field(self.season.as_deref().unwrap_or_default())),
            category: Some(normalize_field(self.category.as_deref().unwrap_or_default())),
            has_detail: Some(self.has_detail.unwrap_or(false)),
            variety: self.variety.clone(),
            character: self.character.clone(),
            sowing: self.sowing.clone(),
            nursery: self.nursery.clone(),
            harvest: self.harvest.clone(),
        }
    }
}

/// Region name to ordered crop entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticDataset {
    regions: BTreeMap<String, Vec<DatasetEntry>>,
}

impl StaticDataset {
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        let regions: BTreeMap<String, Vec<DatasetEntry>> = serde_json::from_str(json)?;
        Ok(Self { regions })
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &DatasetEntry)> {
        self.regions.iter().flat_map(|(region, entries)| {
            entries.iter().map(move |entry| (region.as_str(), entry))
        })
    }

    /// Records of one region in file order; empty for an unknown region.
    pub fn get_by_region(&self, region_name: &str) -> Vec<CropRecord> {
        self.regions
            .get(region_name)
            .map(|entries| entries.iter().map(|e| e.to_record(region_name)).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.regions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Local-mode record source backed by the bundled dataset.
#[derive(Debug, Clone, Default)]
pub struct StaticDatasetSource {
    dataset: Arc<StaticDataset>,
}

impl StaticDatasetSource {
    pub fn new(dataset: StaticDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub fn dataset(&self) -> &StaticDataset {
        &self.dataset
    }
}

impl RecordSource for StaticDatasetSource {
    fn is_remote(&self) -> bool {
        false
    }

    async fn query_by_region(&self, region_name: &str) -> Result<Vec<CropRecord>, FetchError> {
        Ok(self.dataset.get_by_region(region_name))
    }

    async fn delete_by_id(&self, document_id: &str) -> Result<(), PersistenceError> {
        // The bundled file is the source of truth and cannot change at runtime.
        log::debug!("static dataset is read-only, ignoring delete of {}", document_id);
        Ok(())
    }
}
