//! junit-scaffold library — reachable-mock resolution and JUnit 5 test skeleton synthesis.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
