//! Core data models for the workshop scanner

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ScanError;

/// Contents of an item's `project.json`
///
/// Every key is optional here; `file` is enforced when building a record.
/// Keys not listed are ignored, and an explicit `null` reads as absent. A
/// listed key holding a non-string value, or given twice, fails the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectMetadata {
    /// Parse metadata from raw file contents
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// One wallpaper found in the workshop directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallpaperRecord {
    /// Item directory name (the workshop id)
    pub id: String,
    /// Display title, falls back to the id
    pub title: String,
    /// Path to the preview asset
    pub preview: String,
    /// Path to the primary asset
    pub file: String,
    /// Wallpaper type (scene, video, web, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form description, empty when absent
    pub description: String,
}

impl WallpaperRecord {
    /// Build a record from an item's metadata, applying defaults.
    ///
    /// `preview` and `file` are joined onto `item_dir`. Returns `None` when
    /// the metadata has no `file`.
    pub fn from_metadata(
        id: impl Into<String>,
        item_dir: &Path,
        metadata: ProjectMetadata,
        default_preview: &str,
        default_type: &str,
    ) -> Option<Self> {
        let id = id.into();
        let file = compose_path(item_dir, &metadata.file?);
        let preview = compose_path(
            item_dir,
            metadata.preview.as_deref().unwrap_or(default_preview),
        );

        Some(Self {
            title: metadata.title.unwrap_or_else(|| id.clone()),
            id,
            preview,
            file,
            kind: metadata.kind.unwrap_or_else(|| default_type.to_string()),
            description: metadata.description.unwrap_or_default(),
        })
    }
}

/// Join a metadata-relative path onto the item directory.
///
/// An absolute `relative` replaces the directory; an empty one yields the
/// directory itself.
fn compose_path(item_dir: &Path, relative: &str) -> String {
    if relative.is_empty() {
        return item_dir.to_string_lossy().to_string();
    }
    item_dir.join(relative).to_string_lossy().to_string()
}

/// Result of a scan operation
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Records for every readable item, in directory order
    pub records: Vec<WallpaperRecord>,
    /// Items that were skipped because their metadata could not be used
    pub skipped: Vec<ScanError>,
    /// Whether the workshop content directory existed
    pub workshop_found: bool,
    /// Total scan duration in milliseconds
    pub duration_ms: u64,
}

impl ScanReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of skipped items
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Consume the report, keeping only the records
    pub fn into_records(self) -> Vec<WallpaperRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_ignores_unknown_and_null_fields() {
        let metadata = ProjectMetadata::from_slice(
            br#"{"title":null,"file":"a.mp4","type":"video","general":{"properties":{}},"tags":["x"]}"#,
        )
        .unwrap();

        assert_eq!(metadata.title, None);
        assert_eq!(metadata.file.as_deref(), Some("a.mp4"));
        assert_eq!(metadata.kind.as_deref(), Some("video"));
    }

    #[test]
    fn test_metadata_rejects_non_string_field() {
        assert!(ProjectMetadata::from_slice(br#"{"file":"a.mp4","title":7}"#).is_err());
        assert!(ProjectMetadata::from_slice(b"[1,2]").is_err());
        assert!(ProjectMetadata::from_slice(b"{not json").is_err());
    }

    #[test]
    fn test_null_preview_falls_back_to_default() {
        let metadata =
            ProjectMetadata::from_slice(br#"{"file":"scene.pkg","preview":null}"#).unwrap();
        let record = WallpaperRecord::from_metadata(
            "3",
            Path::new("/w/3"),
            metadata,
            "preview.gif",
            "unknown",
        )
        .unwrap();
        assert_eq!(record.preview, "/w/3/preview.gif");
    }

    #[test]
    fn test_mistyped_or_repeated_fields_fail_the_item() {
        assert!(ProjectMetadata::from_slice(br#"{"file":"a.mp4","description":["x"]}"#).is_err());
        assert!(ProjectMetadata::from_slice(br#"{"file":"a.mp4","file":"b.mp4"}"#).is_err());
        assert!(ProjectMetadata::from_slice(br#"{"file":"a.mp4","tags":7,"visibility":null}"#).is_ok());
    }

    #[test]
    fn test_record_defaults() {
        let metadata = ProjectMetadata {
            file: Some("scene.pkg".to_string()),
            ..Default::default()
        };
        let record = WallpaperRecord::from_metadata(
            "100",
            Path::new("/w/100"),
            metadata,
            "preview.gif",
            "unknown",
        )
        .unwrap();

        assert_eq!(record.title, "100");
        assert_eq!(record.preview, "/w/100/preview.gif");
        assert_eq!(record.file, "/w/100/scene.pkg");
        assert_eq!(record.kind, "unknown");
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_record_requires_file() {
        let metadata = ProjectMetadata {
            title: Some("No asset".to_string()),
            ..Default::default()
        };
        assert!(WallpaperRecord::from_metadata(
            "1",
            Path::new("/w/1"),
            metadata,
            "preview.gif",
            "unknown"
        )
        .is_none());
    }

    #[test]
    fn test_record_serializes_type_key() {
        let record = WallpaperRecord {
            id: "100".to_string(),
            title: "Sky".to_string(),
            preview: "/w/100/preview.gif".to_string(),
            file: "/w/100/scene.pkg".to_string(),
            kind: "scene".to_string(),
            description: String::new(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":"100","title":"Sky","preview":"/w/100/preview.gif","file":"/w/100/scene.pkg","type":"scene","description":""}"#
        );
    }

    #[test]
    fn test_compose_path_edge_cases() {
        let dir = Path::new("/w/7");
        assert_eq!(compose_path(dir, ""), "/w/7");
        assert_eq!(compose_path(dir, "/abs/video.mp4"), "/abs/video.mp4");
        assert_eq!(compose_path(dir, "media/clip.webm"), "/w/7/media/clip.webm");
    }

    proptest::proptest! {
        #[test]
        fn prop_present_fields_are_kept_verbatim(
            id in "[0-9]{1,10}",
            title in proptest::option::of(".*"),
            kind in proptest::option::of("[a-z]{1,8}"),
            description in proptest::option::of(".*"),
        ) {
            let metadata = ProjectMetadata {
                title: title.clone(),
                preview: None,
                file: Some("scene.pkg".to_string()),
                kind: kind.clone(),
                description: description.clone(),
            };
            let record = WallpaperRecord::from_metadata(
                id.clone(),
                Path::new("/w").join(&id).as_path(),
                metadata,
                "preview.gif",
                "unknown",
            )
            .unwrap();

            proptest::prop_assert_eq!(record.title, title.unwrap_or_else(|| id.clone()));
            proptest::prop_assert_eq!(record.kind, kind.unwrap_or_else(|| "unknown".to_string()));
            proptest::prop_assert_eq!(record.description, description.unwrap_or_default());
            proptest::prop_assert_eq!(record.preview, format!("/w/{}/preview.gif", id));
            proptest::prop_assert_eq!(record.id, id);
        }
    }

    #[test]
    fn test_scan_report_default() {
        let report = ScanReport::new();
        assert!(report.records.is_empty());
        assert_eq!(report.skipped_count(), 0);
        assert!(!report.workshop_found);
    }
}
