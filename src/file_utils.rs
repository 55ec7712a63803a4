use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::Result;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension helpers for paths in log output.
pub trait PathExt {
    fn format_for_log(&self) -> String;
}

impl PathExt for Path {
    fn format_for_log(&self) -> String {
        format!("\"{}\"", self.display())
    }
}

/// Returns true when the path's suffix is on the navigable whitelist.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lists the whitelisted image files directly inside `dir`, sorted by path.
///
/// Ordering is plain byte order of the path: `B.PNG` comes before `a.png`
/// and `img10` before `img2`.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    image_files.sort();
    Ok(image_files)
}

/// Scans the parent directory of `anchor`.
///
/// Directory read failures never reach the caller: they are logged and an
/// empty sequence is returned, which leaves navigation disabled.
pub fn scan_siblings(anchor: &Path) -> Vec<PathBuf> {
    let dir = match anchor.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let start = std::time::Instant::now();
    match scan_directory(dir) {
        Ok(files) => {
            debug!(
                "Scanned {} ({} images) in {:?}",
                dir.format_for_log(),
                files.len(),
                start.elapsed()
            );
            files
        }
        Err(e) => {
            warn!("Navigation disabled for {}: {}", dir.format_for_log(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"not really an image").expect("failed to write test file");
        path
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn mixed_case_extensions_are_filtered_and_byte_sorted() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.png");
        touch(dir.path(), "b.txt");
        let anchor = touch(dir.path(), "c.jpg");
        touch(dir.path(), "B.PNG");

        let files = scan_siblings(&anchor);

        assert_eq!(names(&files), vec!["B.PNG", "a.png", "c.jpg"]);
    }

    #[test]
    fn scan_is_independent_of_anchor() {
        let dir = tempdir().unwrap();
        let all: Vec<PathBuf> = ["x.gif", "y.webp", "z.bmp", "w.jpeg"]
            .iter()
            .map(|n| touch(dir.path(), n))
            .collect();

        let expected = scan_siblings(&all[0]);
        assert_eq!(expected.len(), 4);
        for anchor in &all[1..] {
            assert_eq!(scan_siblings(anchor), expected);
        }
    }

    #[test]
    fn sort_is_not_numeric_aware() {
        let dir = tempdir().unwrap();
        let anchor = touch(dir.path(), "img2.png");
        touch(dir.path(), "img10.png");

        assert_eq!(names(&scan_siblings(&anchor)), vec!["img10.png", "img2.png"]);
    }

    #[test]
    fn subdirectories_are_not_entered() {
        let dir = tempdir().unwrap();
        let anchor = touch(dir.path(), "top.png");
        let nested = dir.path().join("nested.png");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "inner.png");

        assert_eq!(names(&scan_siblings(&anchor)), vec!["top.png"]);
    }

    #[test]
    fn unsupported_formats_are_left_out() {
        let dir = tempdir().unwrap();
        let anchor = touch(dir.path(), "scan.tif");
        touch(dir.path(), "logo.svg");

        assert!(scan_siblings(&anchor).is_empty());
    }

    #[test]
    fn unreadable_directory_yields_empty_sequence() {
        let dir = tempdir().unwrap();
        let anchor = dir.path().join("missing").join("photo.png");

        assert!(scan_siblings(&anchor).is_empty());
        assert!(scan_directory(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn whitelist_check_ignores_case() {
        assert!(is_supported_image(Path::new("/tmp/HOLIDAY.JPG")));
        assert!(is_supported_image(Path::new("shot.WebP")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}
