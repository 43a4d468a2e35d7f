use std::sync::Arc;

use katachi_config::Config;
use tokio::sync::{Mutex, RwLock};

use crate::profile::{Profile, ProfileStore};
use crate::session::ActiveSession;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub profile: RwLock<Profile>,
    pub store: ProfileStore,
    pub session: Mutex<Option<ActiveSession>>,
}

impl AppState {
    pub fn new(config: Config, profile: Profile, store: ProfileStore) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            profile: RwLock::new(profile),
            store,
            session: Mutex::new(None),
        }
    }

    pub async fn save_profile(&self) -> anyhow::Result<()> {
        let profile = self.profile.read().await;
        self.store.save(&profile)
    }
}
