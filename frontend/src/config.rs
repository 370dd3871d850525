//! Runtime configuration read from `/data/appConfig.json` at startup.

use crate::net::fetch_json;
use serde::Deserialize;

pub const CONFIG_URL: &str = "/data/appConfig.json";
pub const PULLDOWN_URL: &str = "/data/pulldown.json";
pub const REGION_MAP_URL: &str = "/data/regionMap.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Use the document store instead of the bundled dataset.
    pub remote_mode: bool,
    pub dataset_url: String,
    /// Directory holding the `<slug>Crops.json` detail files.
    pub detail_base_url: String,
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote_mode: false,
            dataset_url: "/data/cropsData.json".to_string(),
            detail_base_url: "/data".to_string(),
            api_base: "/api".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration, falling back to local mode defaults.
    pub async fn load() -> Self {
        match fetch_json::<AppConfig>(CONFIG_URL).await {
            Ok(config) => {
                log::info!(
                    "configuration loaded ({} mode)",
                    if config.remote_mode { "remote" } else { "local" }
                );
                config
            }
            Err(e) => {
                log::warn!("cannot load {}: {}; using defaults", CONFIG_URL, e);
                Self::default()
            }
        }
    }

    pub fn detail_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.detail_base_url.trim_end_matches('/'), file_name)
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/collections/{}/documents",
            self.api_base.trim_end_matches('/'),
            collection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "remoteMode": true }"#).unwrap();
        assert!(config.remote_mode);
        assert_eq!(config.dataset_url, "/data/cropsData.json");
        assert_eq!(config.collection_url("crops"), "/api/collections/crops/documents");
    }

    #[test]
    fn urls_tolerate_trailing_slashes() {
        let config = AppConfig {
            detail_base_url: "/assets/".to_string(),
            api_base: "http://localhost:8080/api/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.detail_url("niigataCrops.json"), "/assets/niigataCrops.json");
        assert_eq!(
            config.collection_url("varieties"),
            "http://localhost:8080/api/collections/varieties/documents"
        );
    }
}
