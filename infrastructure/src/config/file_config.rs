//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field has a default, so a missing file or empty section is never
//! an error.

use patter_domain::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// History settings (`[history]` section)
    pub history: FileHistoryConfig,
    /// REPL settings (`[repl]` section)
    pub repl: FileReplConfig,
}

/// Raw history configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Maximum number of messages kept in the rolling transcript
    pub capacity: usize,
    /// Path of the snapshot file
    pub file: String,
    /// Mirror the transcript to the snapshot file
    pub persist: bool,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            file: "chat_history.json".to_string(),
            persist: true,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Print the welcome banner on startup
    pub banner: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self { banner: true }
    }
}
