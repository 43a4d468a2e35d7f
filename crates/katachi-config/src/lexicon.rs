use std::env;

use serde::{Deserialize, Serialize};

fn default_use_builtin() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LexiconConfig {
    /// Start from the starter vocabulary compiled into the binary
    #[serde(default = "default_use_builtin")]
    pub use_builtin: bool,
    /// Lexicon JSON files merged over the builtin words, later wins
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl LexiconConfig {
    pub fn new() -> Self {
        let additional_paths = env::var("KATACHI_LEXICON")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            use_builtin: default_use_builtin(),
            additional_paths,
        }
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            use_builtin: default_use_builtin(),
            additional_paths: vec![],
        }
    }
}
