//! Configuration management.
//!
//! Layered loading (low to high priority):
//! 1. Rust defaults (`Default` + `serde(default)`)
//! 2. User config file (`<config dir>/commit-edit/config.toml`)
//! 3. `COMMIT_EDIT__*` environment variables

mod loader;
mod structs;

pub use loader::{get_config_dir, load_config, load_config_from};
pub use structs::{AppConfig, CommitConfig, UIConfig};

#[cfg(test)]
mod tests;
