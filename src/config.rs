use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub artists: Vec<ArtistConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalogue root including the language segment, e.g. `https://www.wikiart.org/en`
    pub base_url: String,
    /// Regex matching the scheme and host that serve painting images
    pub image_host_pattern: String,
    pub user_agent: String,
    pub request_delay_ms: u64,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Paintings shown on the first listing page
    pub first_page_quota: u32,
    /// Paintings shown on every following listing page
    pub page_quota: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub base_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistConfig {
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub limit: Option<usize>,
}

fn default_active() -> bool {
    true
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn active_artists(&self) -> impl Iterator<Item = &ArtistConfig> {
        self.artists.iter().filter(|a| a.active)
    }
}

impl CatalogConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.wikiart.org/en".to_string(),
            image_host_pattern: r"https://uploads\d\.wikiart\.org".to_string(),
            user_agent: "curator/0.1 (painting dataset builder)".to_string(),
            request_delay_ms: 100,
            timeout_secs: 30,
            connect_timeout_secs: 10,
            first_page_quota: 20,
            page_quota: 60,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_path: "./data/raw".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let artists = ["Zurbaran", "Sorolla", "Bermejo"]
            .into_iter()
            .map(|name| ArtistConfig {
                name: name.to_string(),
                active: true,
                limit: None,
            })
            .collect();

        Config {
            catalog: CatalogConfig::default(),
            storage: StorageConfig::default(),
            artists,
        }
    }
}
