/// Ordered asset manifest
///
/// The manifest is the static, ordered list of every image the page can show.
/// It is built once at startup (or loaded from a JSON cache) and never
/// changes while the application runs.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;
use tracing::{info, warn};

use super::scan::{is_image_file, is_portfolio_image, scan_folder};
use crate::error::AssetError;
use crate::state::data::ImageRef;

/// Per-project folders live under `<root>/projects/<folder>`
pub const PROJECTS_DIR: &str = "projects";
/// Additional fallback images live under `<root>/images`
pub const ADDITIONAL_DIR: &str = "images";
/// Hero section background at the asset root
pub const HERO_BACKGROUND: &str = "hero-bg.jpg";
/// Portrait for the about section at the asset root, first match wins
pub const HEADSHOTS: [&str; 2] = ["polina-headshot.jpg", "headshot.jpg"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    /// Unix timestamp of the scan that produced this manifest
    pub generated_at: i64,
    /// Asset root the scan ran against
    pub root: PathBuf,
    /// Images per project folder, keyed by folder name
    pub folders: BTreeMap<String, Vec<ImageRef>>,
    /// Primary portfolio fallback (`portfolio-*.jpg`)
    pub portfolio: Vec<ImageRef>,
    /// Additional fallback (`images/*`)
    pub additional: Vec<ImageRef>,
    pub hero_background: Option<ImageRef>,
    pub headshot: Option<ImageRef>,
}

impl AssetManifest {
    /// Scan the asset tree under `root` for the given project folders.
    ///
    /// Folders that are missing or empty map to an empty list; callers
    /// apply fallback.
    pub fn scan<S: AsRef<str>>(root: &Path, folders: &[S]) -> Self {
        let projects_root = root.join(PROJECTS_DIR);

        let folders = folders
            .iter()
            .map(|name| {
                let name = name.as_ref();
                (
                    name.to_string(),
                    scan_folder(&projects_root.join(name), is_image_file),
                )
            })
            .collect();

        let existing = |name: &str| {
            let path = root.join(name);
            path.is_file().then(|| ImageRef::new(path))
        };

        Self {
            generated_at: Utc::now().timestamp(),
            root: root.to_path_buf(),
            folders,
            portfolio: scan_folder(root, is_portfolio_image),
            additional: scan_folder(&root.join(ADDITIONAL_DIR), is_image_file),
            hero_background: existing(HERO_BACKGROUND),
            headshot: HEADSHOTS.iter().find_map(|name| existing(name)),
        }
    }

    /// Ordered images of a project folder (empty if the folder was not scanned)
    pub fn folder(&self, name: &str) -> &[ImageRef] {
        self.folders.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether this manifest was scanned from `root` for exactly `folders`
    pub fn matches<S: AsRef<str>>(&self, root: &Path, folders: &[S]) -> bool {
        self.root == root
            && self.folders.len() == folders.len()
            && folders.iter().all(|name| self.folders.contains_key(name.as_ref()))
    }

    /// Total number of image references across all lists
    pub fn image_count(&self) -> usize {
        self.folders.values().map(Vec::len).sum::<usize>()
            + self.portfolio.len()
            + self.additional.len()
    }

    /// Convert to a JSON string for the manifest cache
    pub fn to_json(&self) -> Result<String, AssetError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AssetError::SerializeManifest(Arc::new(e)))
    }

    /// Read a manifest previously written with [`AssetManifest::save`]
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let json = fs::read_to_string(path).map_err(|e| AssetError::ReadManifest {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })?;

        serde_json::from_str(&json).map_err(|e| AssetError::ParseManifest {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })
    }

    /// Write the manifest as JSON, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), AssetError> {
        let json = self.to_json()?;
        let write_error = |e| AssetError::WriteManifest {
            path: path.to_path_buf(),
            source: Arc::new(e),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, json).map_err(write_error)
    }
}

/// Produce the manifest, preferring the JSON cache when one is configured.
///
/// A cache that cannot be read, or that was scanned from another root or
/// folder set, is replaced by a fresh scan; a cache path that does not
/// exist yet receives the fresh scan.
pub fn resolve_manifest(root: &Path, folders: &[String], cache: Option<&Path>) -> AssetManifest {
    if let Some(cache) = cache {
        if cache.exists() {
            match AssetManifest::load(cache) {
                Ok(manifest) if !manifest.matches(root, folders) => {
                    warn!(path = %cache.display(), "⚠️  Asset manifest is for another tree; rescanning assets");
                }
                Ok(manifest) => {
                    info!(path = %cache.display(), images = manifest.image_count(), "📁 Loaded asset manifest");
                    return manifest;
                }
                Err(e) => warn!("⚠️  {e}; rescanning assets"),
            }
        }
    }

    info!(root = %root.display(), "🔍 Scanning assets");
    let manifest = AssetManifest::scan(root, folders);
    info!(images = manifest.image_count(), "✅ Asset scan complete");

    if let Some(cache) = cache {
        match manifest.save(cache) {
            Ok(()) => info!(path = %cache.display(), "💾 Wrote asset manifest"),
            Err(e) => warn!("⚠️  {e}"),
        }
    }

    manifest
}

/// Resolve the manifest on a blocking thread so the UI stays responsive
pub async fn load_manifest(
    root: PathBuf,
    folders: Vec<String>,
    cache: Option<PathBuf>,
) -> Result<AssetManifest, AssetError> {
    task::spawn_blocking(move || resolve_manifest(&root, &folders, cache.as_deref()))
        .await
        .map_err(|e| AssetError::Join(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn sample_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("projects/fashion-collection/02.jpg"));
        touch(&root.join("projects/fashion-collection/01.jpeg"));
        touch(&root.join("projects/fashion-collection/readme.md"));
        touch(&root.join("portfolio-2.jpg"));
        touch(&root.join("portfolio-1.jpg"));
        touch(&root.join("portfolio-3.png"));
        touch(&root.join("images/extra.webp"));
        touch(&root.join(HERO_BACKGROUND));
        dir
    }

    fn names(images: &[ImageRef]) -> Vec<String> {
        images.iter().map(ImageRef::file_name).collect()
    }

    #[test]
    fn test_scan_groups_and_orders() {
        let dir = sample_tree();
        let manifest = AssetManifest::scan(dir.path(), &["fashion-collection", "behind-scenes"]);

        assert_eq!(names(manifest.folder("fashion-collection")), vec!["01.jpeg", "02.jpg"]);
        assert!(manifest.folder("behind-scenes").is_empty());
        assert!(manifest.folder("never-scanned").is_empty());
        assert_eq!(names(&manifest.portfolio), vec!["portfolio-1.jpg", "portfolio-2.jpg"]);
        assert_eq!(names(&manifest.additional), vec!["extra.webp"]);
        assert_eq!(manifest.hero_background, Some(ImageRef::new(dir.path().join(HERO_BACKGROUND))));
        assert_eq!(manifest.headshot, None);
        assert_eq!(manifest.image_count(), 5);
    }

    #[test]
    fn test_repeated_scans_agree() {
        let dir = sample_tree();
        let first = AssetManifest::scan(dir.path(), &["fashion-collection"]);
        let second = AssetManifest::scan(dir.path(), &["fashion-collection"]);
        assert_eq!(first.folders, second.folders);
        assert_eq!(first.portfolio, second.portfolio);
        assert_eq!(first.additional, second.additional);
    }

    #[test]
    fn test_save_and_load() {
        let dir = sample_tree();
        let manifest = AssetManifest::scan(dir.path(), &["fashion-collection"]);
        let cache = dir.path().join("cache/manifest.json");

        manifest.save(&cache).unwrap();
        let restored = AssetManifest::load(&cache).unwrap();

        assert_eq!(manifest, restored);
    }

    #[test]
    fn test_load_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("manifest.json");
        fs::write(&cache, "{ not json").unwrap();

        let result = AssetManifest::load(&cache);
        assert!(matches!(result, Err(AssetError::ParseManifest { .. })));
    }

    #[test]
    fn test_corrupt_cache_falls_back_to_scan() {
        let dir = sample_tree();
        let cache = dir.path().join("manifest.json");
        fs::write(&cache, "{ \"folders\": 7 }").unwrap();

        let folders = vec!["fashion-collection".to_string()];
        let manifest = resolve_manifest(dir.path(), &folders, Some(&cache));

        assert_eq!(manifest.folder("fashion-collection").len(), 2);
        assert_eq!(AssetManifest::load(&cache).unwrap(), manifest);
    }

    #[test]
    fn test_cache_from_another_root_is_rescanned() {
        let old = sample_tree();
        let new = tempfile::tempdir().unwrap();
        touch(&new.path().join("projects/fashion-collection/new.jpg"));
        let cache = old.path().join("manifest.json");
        let folders = vec!["fashion-collection".to_string()];

        resolve_manifest(old.path(), &folders, Some(&cache));
        let manifest = resolve_manifest(new.path(), &folders, Some(&cache));

        assert_eq!(manifest.root, new.path());
        assert_eq!(names(manifest.folder("fashion-collection")), vec!["new.jpg"]);
        assert_eq!(AssetManifest::load(&cache).unwrap(), manifest);
    }

    #[test]
    fn test_cache_missing_a_folder_is_rescanned() {
        let dir = sample_tree();
        touch(&dir.path().join("projects/behind-scenes/bts.jpg"));
        let cache = dir.path().join("manifest.json");

        resolve_manifest(dir.path(), &["fashion-collection".to_string()], Some(&cache));
        let folders = vec!["fashion-collection".to_string(), "behind-scenes".to_string()];
        let manifest = resolve_manifest(dir.path(), &folders, Some(&cache));

        assert_eq!(names(manifest.folder("behind-scenes")), vec!["bts.jpg"]);
        assert_eq!(manifest.folder("fashion-collection").len(), 2);
    }

    #[test]
    fn test_headshot_prefers_named_portrait() {
        let dir = sample_tree();
        touch(&dir.path().join("headshot.jpg"));
        let plain = AssetManifest::scan(dir.path(), &["fashion-collection"]);
        assert_eq!(plain.headshot, Some(ImageRef::new(dir.path().join("headshot.jpg"))));

        touch(&dir.path().join("polina-headshot.jpg"));
        let named = AssetManifest::scan(dir.path(), &["fashion-collection"]);
        assert_eq!(named.headshot, Some(ImageRef::new(dir.path().join("polina-headshot.jpg"))));
    }

    #[tokio::test]
    async fn test_load_manifest_writes_then_reuses_cache() {
        let dir = sample_tree();
        let cache = dir.path().join("manifest.json");
        let folders = vec!["fashion-collection".to_string()];

        let scanned = load_manifest(dir.path().to_path_buf(), folders.clone(), Some(cache.clone()))
            .await
            .unwrap();
        assert!(cache.exists());

        // New files are invisible while the cache is in place
        touch(&dir.path().join("projects/fashion-collection/03.jpg"));
        let cached = load_manifest(dir.path().to_path_buf(), folders, Some(cache))
            .await
            .unwrap();

        assert_eq!(scanned, cached);
        assert_eq!(cached.folder("fashion-collection").len(), 2);
    }
}
