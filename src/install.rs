//! Plugin installer - copies the plasma wallpaper plugin into the user's data dir

use std::fs;
use std::io;
use walkdir::WalkDir;

use crate::config::InstallConfig;
use crate::error::InstallError;

/// Summary of a completed install
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Directories created under the destination, including its root
    pub dirs: u64,
    /// Files copied
    pub files: u64,
}

/// Copy the plugin tree to its destination, replacing any previous install
pub fn install_plugin(config: &InstallConfig) -> Result<InstallReport, InstallError> {
    if !config.source.is_dir() {
        return Err(InstallError::SourceNotFound(config.source.clone()));
    }

    if config.dest.exists() {
        log::info!("Removing previous install at {}", config.dest.display());
        fs::remove_dir_all(&config.dest).map_err(|e| InstallError::io(&config.dest, e))?;
    }
    if let Some(parent) = config.dest.parent() {
        fs::create_dir_all(parent).map_err(|e| InstallError::io(parent, e))?;
    }

    let mut report = InstallReport::default();
    for entry in WalkDir::new(&config.source).follow_links(true) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(&config.source)
            .map_err(|_| {
                InstallError::io(
                    entry.path(),
                    io::Error::new(io::ErrorKind::InvalidInput, "path outside plugin source"),
                )
            })?;
        let target = config.dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir(&target).map_err(|e| InstallError::io(&target, e))?;
            report.dirs += 1;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| InstallError::io(&target, e))?;
            report.files += 1;
        }
    }

    log::debug!(
        "Copied {} files in {} directories to {}",
        report.files,
        report.dirs,
        config.dest.display()
    );
    Ok(report)
}
