use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::state::data::ImageRef;

/// Extensions accepted for project and additional images.
/// Matched exactly, the same way a `*.{jpg,jpeg,png,webp}` glob would.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Primary portfolio images live at the asset root as `portfolio-*.jpg`
pub const PORTFOLIO_PREFIX: &str = "portfolio-";
const PORTFOLIO_SUFFIX: &str = ".jpg";

/// Check if a path has one of the accepted image extensions
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Check if a path matches `portfolio-*.jpg`
pub fn is_portfolio_image(path: &Path) -> bool {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.starts_with(PORTFOLIO_PREFIX) && name.ends_with(PORTFOLIO_SUFFIX),
        None => false,
    }
}

// `*` never matches dotfiles
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Collect the files directly inside `dir` that satisfy `matches`.
///
/// The result is sorted ascending by path string (byte order, case-sensitive)
/// so repeated scans of the same tree give the same order. A missing or
/// unreadable directory yields an empty list.
pub fn scan_folder<F>(dir: &Path, matches: F) -> Vec<ImageRef>
where
    F: Fn(&Path) -> bool,
{
    let mut paths: Vec<_> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && !is_hidden(path) && matches(path))
        .collect();

    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    debug!(dir = %dir.display(), count = paths.len(), "scanned asset folder");

    paths.into_iter().map(ImageRef::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_extension_match_is_exact() {
        assert!(is_image_file(Path::new("a/look.jpg")));
        assert!(is_image_file(Path::new("a/look.webp")));
        assert!(!is_image_file(Path::new("a/look.JPG")));
        assert!(!is_image_file(Path::new("a/look.gif")));
        assert!(!is_image_file(Path::new("a/look")));
    }

    #[test]
    fn test_portfolio_pattern() {
        assert!(is_portfolio_image(Path::new("portfolio-1.jpg")));
        assert!(is_portfolio_image(Path::new("root/portfolio-studio.jpg")));
        assert!(!is_portfolio_image(Path::new("portfolio-1.png")));
        assert!(!is_portfolio_image(Path::new("portfolio.jpg")));
        assert!(!is_portfolio_image(Path::new("hero-bg.jpg")));
    }

    #[test]
    fn test_scan_sorts_by_path() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.jpg", "B.png", "a.webp", "a10.jpg", "a2.jpg", "notes.txt"] {
            touch(dir.path(), name);
        }

        let names: Vec<String> = scan_folder(dir.path(), is_image_file)
            .iter()
            .map(|image| image.file_name())
            .collect();

        // Uppercase sorts before lowercase, digits compare as characters
        assert_eq!(names, vec!["B.png", "a.webp", "a10.jpg", "a2.jpg", "c.jpg"]);
    }

    #[test]
    fn test_scan_is_not_recursive_and_skips_dotfiles() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "top.jpg");
        touch(dir.path(), ".hidden.jpg");
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "deep.jpg");

        let images = scan_folder(dir.path(), is_image_file);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].file_name(), "top.jpg");
    }

    #[test]
    fn test_missing_folder_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let images = scan_folder(&dir.path().join("does-not-exist"), is_image_file);
        assert!(images.is_empty());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["3.jpg", "1.jpg", "2.jpg"] {
            touch(dir.path(), name);
        }
        let first = scan_folder(dir.path(), is_image_file);
        let second = scan_folder(dir.path(), is_image_file);
        assert_eq!(first, second);
    }
}
