pub mod fs;
pub mod java;
