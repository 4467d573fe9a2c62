//! Mock port implementations for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use junit_scaffold::domain::model::ClassModel;
use junit_scaffold::domain::ports::{ClassParser, SourceLocator, SourceReader};

/// Mock SourceLocator resolving names from an in-memory table.
pub struct MockSourceLocator {
    roots: Vec<PathBuf>,
    files: HashMap<String, PathBuf>,
}

impl MockSourceLocator {
    pub fn new() -> Self {
        Self {
            roots: vec![PathBuf::from("/src")],
            files: HashMap::new(),
        }
    }

    pub fn with_class(mut self, name: &str, path: &str) -> Self {
        self.files.insert(name.to_string(), PathBuf::from(path));
        self
    }
}

impl Default for MockSourceLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceLocator for MockSourceLocator {
    fn locate(&self, class_name: &str) -> Option<PathBuf> {
        self.files.get(class_name).cloned()
    }

    fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

/// Mock SourceReader that serves content from an in-memory map.
pub struct MockSourceReader {
    files: HashMap<PathBuf, String>,
}

impl MockSourceReader {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl Default for MockSourceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for MockSourceReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{}", path.display()))
        })
    }
}

/// Mock ClassParser returning a prebuilt model, or failing when none is set.
pub struct MockClassParser {
    model: Option<ClassModel>,
}

impl MockClassParser {
    pub fn returning(model: ClassModel) -> Self {
        Self { model: Some(model) }
    }

    pub fn failing() -> Self {
        Self { model: None }
    }
}

impl ClassParser for MockClassParser {
    fn parse(&self, _source: &str) -> Result<ClassModel> {
        self.model
            .clone()
            .ok_or_else(|| anyhow!("unexpected token"))
    }
}

/// Sink that accepts `limit` bytes, then fails every write.
pub struct FailingSink {
    pub written: Vec<u8>,
    limit: usize,
}

impl FailingSink {
    pub fn after(limit: usize) -> Self {
        Self {
            written: Vec::new(),
            limit,
        }
    }
}

impl io::Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() >= self.limit {
            return Err(io::Error::other("sink closed"));
        }
        let n = buf.len().min(self.limit - self.written.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
