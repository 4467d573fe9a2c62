pub mod defaults;
pub mod error;
pub mod imports;
pub mod model;
pub mod ports;
pub mod resolver;
pub mod skeleton;
pub mod synthesizer;
pub mod writer;
