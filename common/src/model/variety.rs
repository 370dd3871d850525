use serde::{Deserialize, Serialize};

/// One named variety of a crop in a region, registered during the session.
///
/// Varieties are owned by a `(region, crop)` pair; see [`ownership_key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarietyRecord {
    /// Session-unique id, time based on the client.
    pub id: String,
    pub region_name: String,
    pub crop_name: String,
    pub variety: String,
    pub character: String,
    pub sowing: String,
    pub nursery: String,
    pub harvest: String,
}

impl VarietyRecord {
    pub fn owner_key(&self) -> String {
        ownership_key(&self.region_name, &self.crop_name)
    }
}

/// Key grouping the varieties of one crop in one region.
pub fn ownership_key(region_name: &str, crop_name: &str) -> String {
    format!("{}__{}", region_name, crop_name)
}
