//! Java structural parsing backed by tree-sitter-java.

mod parser;

pub use parser::JavaClassParser;
