//! CLI subcommand implementations.

pub mod generate;
pub mod info;
pub mod rt60;
pub mod spectrum;
