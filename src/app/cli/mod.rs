//! CLI module containing argument parsing, configuration loading and output display

pub mod args;
pub mod config;
pub mod display;

pub use args::Args;
pub use config::{default_config_path, load_config};

#[cfg(test)]
mod tests;
