use crate::domain::model::ClassModel;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Resolves a class simple name to the source file defining it.
pub trait SourceLocator {
    fn locate(&self, class_name: &str) -> Option<PathBuf>;

    /// Roots searched, in order.
    fn roots(&self) -> &[PathBuf];
}

/// Source code reader port
pub trait SourceReader: Send + Sync {
    fn read(&self, path: &Path) -> std::io::Result<String>;
}

/// Structural parser port: source text to class model.
pub trait ClassParser {
    fn parse(&self, source: &str) -> Result<ClassModel>;
}
