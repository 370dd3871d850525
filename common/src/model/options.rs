use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Choices offered by the search and registration pull-downs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PulldownOptions {
    #[serde(default)]
    pub prefectures: Vec<String>,
    #[serde(default)]
    pub seasons: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub months: Vec<u8>,
}

/// Prefecture to climate-area label ("冷涼地", "中間地", "暖地"), shown under
/// the region selector.
pub type RegionMap = HashMap<String, String>;
