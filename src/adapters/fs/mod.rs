pub mod locator;
pub mod reader;
