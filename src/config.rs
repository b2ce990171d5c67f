//! Configuration for the workshop scanner and plugin installer

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Steam app id of Wallpaper Engine
pub const WALLPAPER_ENGINE_APP_ID: u32 = 431960;

/// Workshop content location relative to the Steam directory
pub const WORKSHOP_CONTENT_SUBPATH: &str = "steamapps/workshop/content";

/// Per-item metadata file name
pub const DEFAULT_METADATA_FILE: &str = "project.json";

/// Preview asset used when the metadata does not name one
pub const DEFAULT_PREVIEW: &str = "preview.gif";

/// Wallpaper type used when the metadata does not name one
pub const DEFAULT_TYPE: &str = "unknown";

/// Plasma wallpaper plugin id
pub const PLUGIN_ID: &str = "wallpaper-engine";

/// Plasma wallpaper plugins location relative to the home directory
pub const PLASMA_WALLPAPERS_SUBPATH: &str = ".local/share/plasma/wallpapers";

/// Configuration for the scanner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Steam installation directory to scan
    pub steam_dir: PathBuf,

    /// Workshop app id whose content is scanned
    pub app_id: u32,

    /// Name of the metadata file inside each item directory
    pub metadata_file: String,

    /// Preview file name when the metadata has none
    pub default_preview: String,

    /// Wallpaper type when the metadata has none
    pub default_type: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            steam_dir: PathBuf::new(),
            app_id: WALLPAPER_ENGINE_APP_ID,
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
            default_preview: DEFAULT_PREVIEW.to_string(),
            default_type: DEFAULT_TYPE.to_string(),
        }
    }
}

impl ScanConfig {
    /// Create a new config for the given Steam directory
    pub fn new(steam_dir: impl Into<PathBuf>) -> Self {
        Self {
            steam_dir: steam_dir.into(),
            ..Default::default()
        }
    }

    /// Create a config builder
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::new()
    }

    /// The workshop content directory holding one subdirectory per item
    pub fn workshop_dir(&self) -> PathBuf {
        self.steam_dir
            .join(WORKSHOP_CONTENT_SUBPATH)
            .join(self.app_id.to_string())
    }

    /// The metadata file path for an item directory
    pub fn metadata_path(&self, item_dir: &Path) -> PathBuf {
        item_dir.join(&self.metadata_file)
    }
}

/// Builder for ScanConfig
#[derive(Debug, Default)]
pub struct ScanConfigBuilder {
    config: ScanConfig,
}

impl ScanConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Steam directory
    pub fn steam_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.steam_dir = dir.into();
        self
    }

    /// Set the workshop app id
    pub fn app_id(mut self, app_id: u32) -> Self {
        self.config.app_id = app_id;
        self
    }

    /// Set the metadata file name
    pub fn metadata_file(mut self, name: impl Into<String>) -> Self {
        self.config.metadata_file = name.into();
        self
    }

    /// Set the fallback preview file name
    pub fn default_preview(mut self, name: impl Into<String>) -> Self {
        self.config.default_preview = name.into();
        self
    }

    /// Set the fallback wallpaper type
    pub fn default_type(mut self, kind: impl Into<String>) -> Self {
        self.config.default_type = kind.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ScanConfig {
        self.config
    }
}

/// Configuration for the plugin installer
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Plugin directory to copy
    pub source: PathBuf,
    /// Install location, replaced wholesale
    pub dest: PathBuf,
}

impl InstallConfig {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }

    /// Default install location under the given home directory
    pub fn default_dest(home: &Path) -> PathBuf {
        home.join(PLASMA_WALLPAPERS_SUBPATH).join(PLUGIN_ID)
    }

    /// Default plugin source, relative to the working directory
    pub fn default_source() -> PathBuf {
        PathBuf::from(PLUGIN_ID)
    }
}
