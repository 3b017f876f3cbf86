/// Asset discovery module
///
/// This module handles:
/// - Discovering images under the asset root, one folder level at a time (scan.rs)
/// - Assembling the ordered manifest and caching it as JSON (manifest.rs)

pub mod manifest;
pub mod scan;

pub use manifest::{load_manifest, AssetManifest};
