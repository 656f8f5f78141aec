//! Directory walking for saved pages.

use crate::error::{ExtractError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Find every file under `root` named exactly `target_name`, at any depth.
///
/// Paths are returned sorted so repeated runs emit records in the same order.
/// Symlinked page files are included; symlinked directories are not entered.
///
/// ## Errors
///
/// [`ExtractError::NotFound`] if `root` does not exist.
pub fn scan_directory(root: &Path, target_name: &str) -> Result<Vec<PathBuf>> {
    ensure_exists(root)?;

    let mut pages = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if entry.file_name() == target_name && entry.path().is_file() {
            pages.push(entry.into_path());
        }
    }

    pages.sort();
    debug!("found {} pages under {}", pages.len(), root.display());
    Ok(pages)
}

/// Fail with [`ExtractError::NotFound`] unless `path` exists.
pub(crate) fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ExtractError::NotFound(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_target_files_at_any_depth() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("content/s/article/deep");
        fs::create_dir_all(&deep).unwrap();
        fs::write(tmp.path().join("index.html"), "").unwrap();
        fs::write(deep.join("index.html"), "").unwrap();
        fs::write(deep.join("other.html"), "").unwrap();
        fs::write(deep.join("index.html.bak"), "").unwrap();

        let pages = scan_directory(tmp.path(), "index.html").unwrap();
        assert_eq!(
            pages,
            vec![tmp.path().join("content/s/article/deep/index.html"), tmp.path().join("index.html")]
        );
    }

    #[test]
    fn directory_named_like_target_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("index.html")).unwrap();
        assert!(scan_directory(tmp.path(), "index.html").unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_page_is_found() {
        let tmp = TempDir::new().unwrap();
        let saved = tmp.path().join("saved.html");
        fs::write(&saved, "").unwrap();
        fs::create_dir_all(tmp.path().join("linked")).unwrap();
        std::os::unix::fs::symlink(&saved, tmp.path().join("linked/index.html")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("missing.html"), tmp.path().join("index.html"))
            .unwrap();

        let pages = scan_directory(tmp.path(), "index.html").unwrap();
        assert_eq!(pages, vec![tmp.path().join("linked/index.html")]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(scan_directory(tmp.path(), "index.html").unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = scan_directory(&missing, "index.html").unwrap_err();
        assert!(matches!(err, ExtractError::NotFound(p) if p == missing));
    }
}
