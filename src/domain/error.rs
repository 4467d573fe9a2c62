use std::path::PathBuf;

/// Failures of a single generation run. None of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Java Class '{name}' Not Found (searched {} source root(s))", .roots.len())]
    ClassNotFound { name: String, roots: Vec<PathBuf> },

    #[error("Failed to read source file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    ParseFailure { path: PathBuf, message: String },

    /// The output sink rejected a write. Output already written is left as is.
    #[error("Failed to write generated test: {0}")]
    SinkWrite(#[from] std::io::Error),
}
