use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_profile_name() -> String {
    "main".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StorageConfig {
    /// Root for persisted progress; the platform data dir when unset
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_profile_name")]
    pub profile_name: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        Self {
            data_dir: env::var("KATACHI_DATA_DIR").ok().map(PathBuf::from),
            profile_name: default_profile_name(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            profile_name: default_profile_name(),
        }
    }
}
