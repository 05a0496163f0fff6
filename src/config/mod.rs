//! Configuration loading and application.
mod apply;
mod loader;
pub mod types;


pub use apply::apply_config;
pub use loader::{has_default_config, load_config};

#[cfg(test)]
pub(crate) use loader::load_config_file;
