//! Recursive image-directory discovery.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively list every file under `dir`, sorted lexicographically by
/// path.
///
/// Sorting makes the last-write-wins image attachment deterministic across
/// platforms; directory-walk order would otherwise be OS-dependent.
///
/// # Errors
///
/// Returns the underlying IO error if the directory cannot be enumerated.
pub fn discover_images(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(std::io::Error::other)?;
        if entry.file_type().is_file() {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_is_sorted_and_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("b").join("deep");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("z.tif"), b"").unwrap();
        std::fs::write(nested.join("a.tif"), b"").unwrap();

        let paths = discover_images(dir.path()).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("b/deep/a.tif"));
        assert!(paths[1].ends_with("z.tif"));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        assert!(discover_images(Path::new("/nonexistent/imgs")).is_err());
    }
}
