//! Engine configuration loaded from TOML.
//!
//! Every section is optional; missing values fall back to defaults so a bare
//! `EngineConfig::default()` is enough for proof rendering into the local data
//! directory.
//!
//! ```toml
//! [docmosis]
//! url = "https://docmosis.example.net"
//! access_key = "secret"
//! timeout_secs = 30
//!
//! [storage]
//! root_dir = "/var/lib/order-docgen"
//!
//! [courts]
//! SA = "Family Court sitting at Swansea"
//!
//! [venues]
//! 96 = "Aberdeen Tribunal Hearing Centre"
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::orders::{DocmosisImage, Language};

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub docmosis: DocmosisConfig,
    pub storage: StorageConfig,
    pub images: ImageConfig,
    /// Local-authority code to court name
    pub courts: HashMap<String, String>,
    /// Hearing venue id to venue name
    pub venues: HashMap<String, String>,
}

impl EngineConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load from an explicit path, else the default location, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "Loading default configuration");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/order-docgen/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("order-docgen").join("config.toml"))
    }
}

/// Docmosis rendering service settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocmosisConfig {
    pub url: Option<Url>,
    pub access_key: AccessKey,
    pub timeout_secs: u64,
}

impl Default for DocmosisConfig {
    fn default() -> Self {
        Self {
            url: None,
            access_key: AccessKey::default(),
            timeout_secs: 30,
        }
    }
}

/// Docmosis access key, wiped from memory on drop
#[derive(Clone, Default, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct AccessKey(String);

impl AccessKey {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(***)")
    }
}

/// Where generated and uploaded documents are stored
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub root_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let root_dir = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("order-docgen")
            .join("documents");
        Self { root_dir }
    }
}

/// Image references stamped onto orders by the common element decorator
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub draft_watermark: String,
    pub court_seal: String,
    pub court_seal_welsh: String,
    pub crest: String,
}

impl ImageConfig {
    /// The seal image for the order's language
    pub fn court_seal(&self, language: Language) -> &str {
        match language {
            Language::English => &self.court_seal,
            Language::Welsh => &self.court_seal_welsh,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            draft_watermark: DocmosisImage::DraftWatermark.value(Language::English).to_string(),
            court_seal: DocmosisImage::CourtSeal.value(Language::English).to_string(),
            court_seal_welsh: DocmosisImage::CourtSeal.value(Language::Welsh).to_string(),
            crest: DocmosisImage::Crest.value(Language::English).to_string(),
        }
    }
}
