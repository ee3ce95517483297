pub mod agents;
pub mod cli;
pub mod config;
pub mod engine;
pub mod generator;
pub mod mappings;
pub mod parser;
pub mod types;
