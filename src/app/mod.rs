pub mod dto;
pub mod generator;
