use std::env;

use serde::{Deserialize, Serialize};

use self::lexicon::LexiconConfig;
use self::session::SessionConfig;
use self::storage::StorageConfig;

pub mod lexicon;
pub mod session;
pub mod storage;

pub use session::{QuizMode, SessionOverrides};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub lexicon: LexiconConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn new() -> Self {
        let mut session = SessionConfig::default();
        if let Some(batch_size) = env::var("KATACHI_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            session.batch_size = batch_size;
        }

        Config {
            session,
            lexicon: LexiconConfig::new(),
            storage: StorageConfig::new(),
        }
    }
}
