//! Per-region crop detail files and the variety listing of a detail page.
//!
//! Detail files are keyed by crop name and list the representative varieties
//! of that crop with stage notes. Session-added varieties are appended to the
//! listing unless a variety of the same name is already shown.

use crate::model::variety::VarietyRecord;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Sowing, nursery and harvest notes for one variety.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageNotes {
    #[serde(default)]
    pub sowing: String,
    #[serde(default)]
    pub nursery: String,
    #[serde(default)]
    pub harvest: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropDetail {
    #[serde(default)]
    pub varieties: Vec<String>,
    #[serde(default)]
    pub details: HashMap<String, StageNotes>,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub category: String,
}

/// Contents of one `<slug>Crops.json` file.
pub type CropDetailFile = HashMap<String, CropDetail>;

/// File slug of the regions that ship a detail file.
pub fn region_slug(region_name: &str) -> Option<&'static str> {
    match region_name {
        "北海道" => Some("hokkaido"),
        "新潟県" => Some("niigata"),
        _ => None,
    }
}

pub fn detail_file_name(region_name: &str) -> Option<String> {
    region_slug(region_name).map(|slug| format!("{}Crops.json", slug))
}

/// One row of a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarietyEntry {
    pub name: String,
    pub character: Option<String>,
    pub notes: Option<StageNotes>,
    /// Registered during this session rather than shipped in the detail file.
    pub added: bool,
}

/// Builds the variety listing of a detail page.
///
/// Static varieties come first in file order, followed by added varieties
/// whose name is not listed yet. The first occurrence of a name wins.
pub fn merge_detail_varieties(
    detail: Option<&CropDetail>,
    added: &[VarietyRecord],
) -> Vec<VarietyEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();

    if let Some(detail) = detail {
        for name in &detail.varieties {
            if !seen.insert(name.clone()) {
                continue;
            }
            entries.push(VarietyEntry {
                name: name.clone(),
                character: None,
                notes: detail.details.get(name).cloned(),
                added: false,
            });
        }
    }

    for variety in added {
        if !seen.insert(variety.variety.clone()) {
            log::debug!(
                "variety '{}' already listed for {}, skipping",
                variety.variety,
                variety.owner_key()
            );
            continue;
        }
        entries.push(VarietyEntry {
            name: variety.variety.clone(),
            character: Some(variety.character.clone()),
            notes: Some(StageNotes {
                sowing: variety.sowing.clone(),
                nursery: variety.nursery.clone(),
                harvest: variety.harvest.clone(),
            }),
            added: true,
        });
    }

    entries
}
