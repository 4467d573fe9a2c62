use crate::domain::ports::SourceReader;
use std::path::Path;

/// File system source reader implementation
pub struct FileSourceReader;

impl FileSourceReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSourceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for FileSourceReader {
    fn read(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}
