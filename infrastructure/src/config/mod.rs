//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileHistoryConfig, FileReplConfig};
pub use loader::ConfigLoader;
