//! Crop records as they appear in a search result.
//!
//! A `CropRecord` is one crop offering in one region. Its identity is the
//! remote `document_id` when the record came from (or was matched against) the
//! remote store, and the derived composite key
//! `region_crop_season_category` otherwise.

use serde::{Deserialize, Serialize};

/// Sentinel used for an unset season or category.
pub const UNSET: &str = "-";

/// Value of the region pull-down before the user picks a prefecture.
pub const UNSELECTED_REGION: &str = "未選択";

/// An inclusive month interval, e.g. sowing from March to May.
///
/// `start > end` describes an interval wrapping over the new year
/// (November to February).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    pub start: u8,
    pub end: u8,
}

impl MonthRange {
    /// Both bounds are calendar months.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.start) && (1..=12).contains(&self.end)
    }
}

/// Which source currently owns a record in a merged result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordOrigin {
    /// Bundled dataset; read-only.
    #[default]
    Static,
    /// Created during this session and held by the Added-Record Store.
    Added,
    /// Read back from the remote document store.
    Remote,
}

/// One crop offering in one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecord {
    pub region_name: String,
    pub crop_name: String,
    pub season: String,
    pub category: String,
    pub has_detail: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sowing_range: Option<MonthRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvest_range: Option<MonthRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip)]
    pub origin: RecordOrigin,
}

impl CropRecord {
    /// Builds a static-origin record, normalising an empty season or category to `"-"`.
    pub fn new(region_name: &str, crop_name: &str, season: &str, category: &str) -> Self {
        Self {
            region_name: region_name.to_string(),
            crop_name: crop_name.to_string(),
            season: normalize_field(season),
            category: normalize_field(category),
            has_detail: false,
            sowing_range: None,
            harvest_range: None,
            document_id: None,
            origin: RecordOrigin::Static,
        }
    }

    pub fn composite_key(&self) -> String {
        composite_key(&self.region_name, &self.crop_name, &self.season, &self.category)
    }

    /// The key used for selection and deletion: the document id when present,
    /// the composite key otherwise.
    pub fn identity(&self) -> String {
        match &self.document_id {
            Some(id) => id.clone(),
            None => self.composite_key(),
        }
    }
}

pub fn composite_key(region_name: &str, crop_name: &str, season: &str, category: &str) -> String {
    format!("{}_{}_{}_{}", region_name, crop_name, season, category)
}

/// Maps a missing or blank season/category to the `"-"` sentinel.
pub fn normalize_field(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        UNSET.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `true` when the region is absent or still at the pull-down placeholder.
pub fn is_unselected_region(region_name: &str) -> bool {
    let trimmed = region_name.trim();
    trimmed.is_empty() || trimmed == UNSELECTED_REGION
}
