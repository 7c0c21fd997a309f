//! Flat directory listing implementation using walkdir.

use super::{filter::ImageFilter, FileLister, ListedFile, ScanResult, SkipReason, SkippedEntry};
use crate::error::ScanError;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Configuration for the directory scanner
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Whether to include hidden files
    pub include_hidden: bool,
    /// Sort entries by file name instead of keeping listing order
    pub sort_by_name: bool,
    /// Whether to follow symbolic links
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_hidden: true,
            sort_by_name: false,
            follow_symlinks: false,
        }
    }
}

/// Scanner implementation using the walkdir crate
pub struct WalkDirScanner {
    config: ScanConfig,
    filter: ImageFilter,
}

impl WalkDirScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        let filter = ImageFilter::new().with_hidden(config.include_hidden);
        Self { config, filter }
    }

    fn skip(result: &mut ScanResult, name: String, reason: SkipReason) {
        debug!(%name, reason = reason.description(), "skipping entry");
        result.skipped.push(SkippedEntry { name, reason });
    }
}

impl FileLister for WalkDirScanner {
    fn list(&self, root: &Path) -> Result<ScanResult, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.config.follow_symlinks);

        if self.config.sort_by_name {
            walker = walker.sort_by_file_name();
        }

        let mut result = ScanResult::default();

        for entry_result in walker {
            let entry = match entry_result {
                Ok(entry) => entry,
                // Failing to read the root itself is fatal; a single bad child is not
                Err(e) if e.depth() > 0 => {
                    let name = e
                        .path()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    Self::skip(&mut result, name, SkipReason::Unreadable);
                    continue;
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.to_path_buf())
                        .unwrap_or_else(|| root.to_path_buf());

                    if e.io_error().map(|e| e.kind())
                        == Some(std::io::ErrorKind::PermissionDenied)
                    {
                        return Err(ScanError::PermissionDenied { path });
                    }
                    return Err(ScanError::ReadDirectory {
                        path,
                        source: e.into(),
                    });
                }
            };

            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                let lossy = entry.file_name().to_string_lossy().into_owned();
                Self::skip(&mut result, lossy, SkipReason::NonUtf8Name);
                continue;
            };

            // Unfollowed symlinks report their own type; check the target too
            let is_dir = entry.file_type().is_dir()
                || (entry.path_is_symlink() && entry.path().is_dir());
            if is_dir {
                Self::skip(&mut result, name, SkipReason::Directory);
                continue;
            }

            if self.filter.is_excluded_hidden(&name) {
                Self::skip(&mut result, name, SkipReason::Hidden);
                continue;
            }

            if !self.filter.has_image_extension(&name) {
                Self::skip(&mut result, name, SkipReason::UnsupportedExtension);
                continue;
            }

            result.files.push(ListedFile {
                path: entry.into_path(),
                name,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_cover(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        File::create(&path).unwrap();
        path
    }

    fn names(result: &ScanResult) -> Vec<&str> {
        result.files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn list_empty_directory_returns_empty_vec() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = WalkDirScanner::new(ScanConfig::default());

        let result = scanner.list(temp_dir.path()).unwrap();

        assert!(result.files.is_empty());
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn list_keeps_images_and_skips_others() {
        let temp_dir = TempDir::new().unwrap();
        create_cover(&temp_dir, "Chemistry by Lee.jpg");
        create_cover(&temp_dir, "notes.txt");

        let scanner = WalkDirScanner::new(ScanConfig::default());
        let result = scanner.list(temp_dir.path()).unwrap();

        assert_eq!(names(&result), vec!["Chemistry by Lee.jpg"]);
        assert_eq!(
            result.skipped,
            vec![SkippedEntry {
                name: "notes.txt".to_string(),
                reason: SkipReason::UnsupportedExtension,
            }]
        );
    }

    #[test]
    fn list_does_not_descend_into_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let subdir = temp_dir.path().join("Archive by Someone.jpg");
        fs::create_dir(&subdir).unwrap();
        File::create(subdir.join("Nested by Author.png")).unwrap();

        let scanner = WalkDirScanner::new(ScanConfig::default());
        let result = scanner.list(temp_dir.path()).unwrap();

        assert!(result.files.is_empty());
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].reason, SkipReason::Directory);
    }

    #[test]
    fn list_sorted_by_name_when_configured() {
        let temp_dir = TempDir::new().unwrap();
        create_cover(&temp_dir, "c by C.png");
        create_cover(&temp_dir, "a by A.png");
        create_cover(&temp_dir, "b by B.png");

        let config = ScanConfig {
            sort_by_name: true,
            ..Default::default()
        };
        let result = WalkDirScanner::new(config).list(temp_dir.path()).unwrap();

        assert_eq!(names(&result), vec!["a by A.png", "b by B.png", "c by C.png"]);
    }

    #[test]
    fn list_can_exclude_hidden_files() {
        let temp_dir = TempDir::new().unwrap();
        create_cover(&temp_dir, "Visible by Author.jpg");
        create_cover(&temp_dir, ".Hidden by Author.jpg");

        let config = ScanConfig {
            include_hidden: false,
            ..Default::default()
        };
        let result = WalkDirScanner::new(config).list(temp_dir.path()).unwrap();

        assert_eq!(names(&result), vec!["Visible by Author.jpg"]);
        assert_eq!(result.skipped[0].reason, SkipReason::Hidden);
    }

    #[test]
    fn list_includes_hidden_files_by_default() {
        let temp_dir = TempDir::new().unwrap();
        create_cover(&temp_dir, ".Hidden by Author.jpg");

        let result = WalkDirScanner::new(ScanConfig::default())
            .list(temp_dir.path())
            .unwrap();

        assert_eq!(result.files.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn list_skips_symlinked_directories() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("Linked by Dir.jpg")).unwrap();

        for follow_symlinks in [false, true] {
            let config = ScanConfig {
                follow_symlinks,
                ..Default::default()
            };
            let result = WalkDirScanner::new(config).list(temp_dir.path()).unwrap();

            assert!(result.files.is_empty(), "follow_symlinks = {follow_symlinks}");
            assert!(result
                .skipped
                .iter()
                .all(|s| s.reason == SkipReason::Directory));
        }
    }

    #[cfg(unix)]
    #[test]
    fn list_keeps_symlinked_covers() {
        let temp_dir = TempDir::new().unwrap();
        let target = create_cover(&temp_dir, "original.bin");
        std::os::unix::fs::symlink(&target, temp_dir.path().join("Alias by Author.png")).unwrap();

        let config = ScanConfig {
            follow_symlinks: true,
            ..Default::default()
        };
        let result = WalkDirScanner::new(config).list(temp_dir.path()).unwrap();

        assert_eq!(names(&result), vec!["Alias by Author.png"]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_unreadable_only_when_followed() {
        let temp_dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("gone.jpg"),
            temp_dir.path().join("Ghost by Nobody.jpg"),
        )
        .unwrap();

        let listed = WalkDirScanner::new(ScanConfig::default())
            .list(temp_dir.path())
            .unwrap();
        assert_eq!(names(&listed), vec!["Ghost by Nobody.jpg"]);

        let config = ScanConfig {
            follow_symlinks: true,
            ..Default::default()
        };
        let followed = WalkDirScanner::new(config).list(temp_dir.path()).unwrap();
        assert!(followed.files.is_empty());
        assert_eq!(followed.skipped[0].reason, SkipReason::Unreadable);
        assert_eq!(followed.skipped[0].name, "Ghost by Nobody.jpg");
    }

    #[test]
    fn list_nonexistent_directory_returns_error() {
        let scanner = WalkDirScanner::new(ScanConfig::default());
        let result = scanner.list(Path::new("/nonexistent/path/12345"));

        assert!(matches!(result, Err(ScanError::DirectoryNotFound { .. })));
    }

    #[test]
    fn list_file_instead_of_directory_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_cover(&temp_dir, "Physics by Hall.jpg");

        let result = WalkDirScanner::new(ScanConfig::default()).list(&file);

        assert!(matches!(result, Err(ScanError::DirectoryNotFound { .. })));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn list_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"Bad \xFF by Author.jpg");
        File::create(temp_dir.path().join(name)).unwrap();

        let result = WalkDirScanner::new(ScanConfig::default())
            .list(temp_dir.path())
            .unwrap();

        assert!(result.files.is_empty());
        assert_eq!(result.skipped[0].reason, SkipReason::NonUtf8Name);
    }
}
