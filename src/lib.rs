//! Wallpaper Engine workshop scanner
//!
//! Lists the wallpapers downloaded through the Steam workshop by reading each
//! item's `project.json`, and installs the plasma wallpaper plugin that
//! consumes that list.

pub mod config;
pub mod error;
pub mod install;
pub mod models;
pub mod scanner;

pub use config::{InstallConfig, ScanConfig};
pub use error::{InstallError, ScanError, ScanErrorKind};
pub use install::{install_plugin, InstallReport};
pub use models::{ProjectMetadata, ScanReport, WallpaperRecord};
pub use scanner::{read_record, scan_wallpapers, scan_workshop};
