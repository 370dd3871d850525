//! Wire shapes of the remote document store.
//!
//! The backend stores documents as flat JSON objects grouped in collections.
//! Crop documents use the field names written by the import command
//! (`prefName`, `cropName`, ...) so that imported and client-created documents
//! are queried the same way.

use crate::model::crop::{normalize_field, CropRecord, MonthRange, RecordOrigin};
use crate::model::variety::VarietyRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Collection holding one document per (region, crop).
pub const CROPS_COLLECTION: &str = "crops";

/// Collection holding varieties registered from the client.
pub const VARIETIES_COLLECTION: &str = "varieties";

/// Field used for the region equality filter.
pub const REGION_FIELD: &str = "prefName";

/// A schedule is either free text ("4月下旬") or a month interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Schedule {
    Range(MonthRange),
    Text(String),
}

impl Schedule {
    pub fn range(&self) -> Option<MonthRange> {
        match self {
            Schedule::Range(range) if range.is_valid() => Some(*range),
            Schedule::Range(range) => {
                log::warn!("ignoring month range {}..{}", range.start, range.end);
                None
            }
            Schedule::Text(_) => None,
        }
    }
}

/// A document as returned by the store: its id plus the raw field object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Value,
}

/// Response body of a document creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedDocument {
    pub id: String,
}

/// Fields of a document in the `crops` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDocument {
    pub pref_name: String,
    pub crop_name: String,
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

impl CropDocument {
    pub fn from_record(record: &CropRecord) -> Self {
        Self {
            pref_name: record.region_name.clone(),
            crop_name: record.crop_name.clone(),
            season: Some(record.season.clone()),
            category: Some(record.category.clone()),
            has_detail: Some(record.has_detail),
            variety: None,
            character: None,
            sowing: record.sowing_range.map(Schedule::Range),
            nursery: None,
            harvest: record.harvest_range.map(Schedule::Range),
        }
    }

    /// Converts a stored document into a remote-origin record carrying its id.
    pub fn into_record(self, document_id: String) -> CropRecord {
        CropRecord {
            region_name: self.pref_name,
            crop_name: self.crop_name,
            season: normalize_field(self.season.as_deref().unwrap_or_default()),
            category: normalize_field(self.category.as_deref().unwrap_or_default()),
            has_detail: self.has_detail.unwrap_or(false),
            sowing_range: self.sowing.as_ref().and_then(Schedule::range),
            harvest_range: self.harvest.as_ref().and_then(Schedule::range),
            document_id: Some(document_id),
            origin: RecordOrigin::Remote,
        }
    }
}

impl TryFrom<StoredDocument> for CropRecord {
    type Error = serde_json::Error;

    fn try_from(document: StoredDocument) -> Result<Self, Self::Error> {
        let fields: CropDocument = serde_json::from_value(document.fields)?;
        Ok(fields.into_record(document.id))
    }
}

/// Fields of a document in the `varieties` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarietyDocument {
    pub variety_id: String,
    pub pref_name: String,
    pub crop_name: String,
    pub variety: String,
    pub character: String,
    pub sowing: String,
    pub nursery: String,
    pub harvest: String,
}

impl From<&VarietyRecord> for VarietyDocument {
    fn from(record: &VarietyRecord) -> Self {
        Self {
            variety_id: record.id.clone(),
            pref_name: record.region_name.clone(),
            crop_name: record.crop_name.clone(),
            variety: record.variety.clone(),
            character: record.character.clone(),
            sowing: record.sowing.clone(),
            nursery: record.nursery.clone(),
            harvest: record.harvest.clone(),
        }
    }
}
