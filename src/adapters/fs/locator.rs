use crate::domain::ports::SourceLocator;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Default source root when none is configured (Maven/Gradle layout).
pub const DEFAULT_SOURCE_ROOT: &str = "src/main/java";

/// Finds a class's source file by walking source roots on disk.
///
/// Roots are tried in order. Inside a root the walk is depth-first pre-order with entries
/// sorted by file name, and the first regular file whose name starts with the requested class
/// name wins. Unreadable entries are skipped.
pub struct FsSourceLocator {
    roots: Vec<PathBuf>,
}

impl FsSourceLocator {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

impl Default for FsSourceLocator {
    fn default() -> Self {
        Self::new(vec![PathBuf::from(DEFAULT_SOURCE_ROOT)])
    }
}

impl SourceLocator for FsSourceLocator {
    fn locate(&self, class_name: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .find_map(|root| find_in_root(root, class_name))
    }

    fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

fn find_in_root(root: &Path, class_name: &str) -> Option<PathBuf> {
    debug!(root = %root.display(), class_name, "searching source root");
    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file()
            && entry.file_name().to_string_lossy().starts_with(class_name)
        {
            return Some(entry.into_path());
        }
    }
    None
}
