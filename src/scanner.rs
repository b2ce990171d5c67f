//! Scanner module - walks the workshop content directory and reads item metadata

use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::models::{ProjectMetadata, ScanReport, WallpaperRecord};

/// Scan a Steam directory with the default configuration
///
/// Items with unreadable or malformed metadata are logged and left out.
pub fn scan_wallpapers(steam_dir: impl Into<PathBuf>) -> Result<Vec<WallpaperRecord>, ScanError> {
    scan_workshop(&ScanConfig::new(steam_dir)).map(ScanReport::into_records)
}

/// Scan the configured workshop directory
///
/// A missing workshop directory yields an empty report. The only errors
/// returned are a failure to stat or list the workshop directory itself.
pub fn scan_workshop(config: &ScanConfig) -> Result<ScanReport, ScanError> {
    let start = Instant::now();
    let workshop_dir = config.workshop_dir();
    let mut report = ScanReport::new();

    let found = workshop_dir
        .try_exists()
        .map_err(|e| ScanError::io(workshop_dir.clone(), &e))?;
    if !found {
        log::info!("No workshop directory at {}", workshop_dir.display());
        report.duration_ms = start.elapsed().as_millis() as u64;
        return Ok(report);
    }
    report.workshop_found = true;
    log::info!("Scanning {}", workshop_dir.display());

    let walker = WalkDir::new(&workshop_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                // Broken links and vanished entries are not item directories
                log::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let item_dir = entry.path();
        match read_record(item_dir, config) {
            Ok(Some(record)) => report.records.push(record),
            Ok(None) => {
                log::debug!("No {} in {}", config.metadata_file, item_dir.display());
            }
            Err(e) => {
                log::error!("Error reading {}: {}", item_id(item_dir), e.message);
                report.skipped.push(e);
            }
        }
    }

    report.duration_ms = start.elapsed().as_millis() as u64;
    log::info!(
        "Found {} wallpapers, skipped {} in {}ms",
        report.records.len(),
        report.skipped_count(),
        report.duration_ms
    );

    Ok(report)
}

/// Read a single item directory into a record
///
/// Returns `Ok(None)` when the directory has no metadata file. A metadata
/// file that cannot be checked or read is an error, not an absence.
pub fn read_record(
    item_dir: &Path,
    config: &ScanConfig,
) -> Result<Option<WallpaperRecord>, ScanError> {
    let metadata_path = config.metadata_path(item_dir);
    let present = metadata_path
        .try_exists()
        .map_err(|e| ScanError::io(metadata_path.clone(), &e))?;
    if !present {
        return Ok(None);
    }

    let bytes =
        std::fs::read(&metadata_path).map_err(|e| ScanError::io(metadata_path.clone(), &e))?;
    let metadata = ProjectMetadata::from_slice(&bytes)
        .map_err(|e| ScanError::parse_error(metadata_path.clone(), &e))?;

    WallpaperRecord::from_metadata(
        item_id(item_dir),
        item_dir,
        metadata,
        &config.default_preview,
        &config.default_type,
    )
    .map(Some)
    .ok_or_else(|| ScanError::missing_field(metadata_path, "file"))
}

fn item_id(item_dir: &Path) -> String {
    item_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
