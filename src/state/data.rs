/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the asset scan, the portfolio builder and the UI layer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Reference to a single image file discovered by the asset scan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// File name only (e.g., "look-01.jpg")
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// One portfolio entry: a themed set of photographs shown as a gallery card
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Stable identifier, also the display order
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Folder under `projects/` the images were resolved from
    pub folder: String,
    /// First image, or the fixed fallback element (None if nothing resolved)
    pub cover_image: Option<ImageRef>,
    /// Ordered images shown in the gallery modal
    pub images: Vec<ImageRef>,
}

impl Project {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}
