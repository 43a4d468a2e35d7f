use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use katachi_config::session::SessionConfig;
use katachi_config::storage::StorageConfig;
use serde::{Deserialize, Serialize};

use crate::progress::Progress;

/// Platform data folder, or a local folder when there is none
fn data_root(storage: &StorageConfig) -> PathBuf {
    storage
        .data_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|d| d.join("katachi")))
        .unwrap_or_else(|| PathBuf::from(".katachi"))
}

fn profiles_dir(storage: &StorageConfig) -> PathBuf {
    data_root(storage).join("profiles")
}

/// Persisted learner profile: last quiz settings plus progress
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub config: SessionConfig,
    pub progress: Progress,
}

impl Profile {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// JSON file backing one profile
#[derive(Debug, Clone)]
pub struct ProfileStore {
    name: String,
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(storage: &StorageConfig) -> Self {
        let name = storage.profile_name.clone();
        let path = profiles_dir(storage).join(format!("{name}.json"));
        Self { name, path }
    }

    pub fn at(name: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the profile; a missing or unreadable file yields a fresh one
    pub fn load(&self) -> anyhow::Result<Profile> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No profile at {}, starting fresh", self.path.display());
                return Ok(Profile::named(&self.name));
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Profile>(&data) {
            Ok(mut profile) => {
                if profile.name.is_empty() {
                    profile.name = self.name.clone();
                }
                Ok(profile)
            }
            Err(e) => {
                tracing::warn!(
                    "Profile {} is corrupt ({}), replacing with defaults",
                    self.path.display(),
                    e
                );
                Ok(Profile::named(&self.name))
            }
        }
    }

    pub fn save(&self, profile: &Profile) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(profile)?)?;
        tracing::debug!("Saved profile {} to {}", profile.name, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use katachi_config::QuizMode;

    #[test]
    fn test_missing_profile_is_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::at("main", dir.path().join("main.json"));
        let profile = store.load().unwrap();
        assert_eq!(profile, Profile::named("main"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::at("main", dir.path().join("nested/main.json"));

        let mut profile = Profile::named("main");
        profile.config.mode = QuizMode::Input;
        profile.progress.record("v_kaku", true, Utc::now());
        store.save(&profile).unwrap();

        assert_eq!(store.load().unwrap(), profile);
    }

    #[test]
    fn test_corrupt_profile_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let profile = ProfileStore::at("main", &path).load().unwrap();
        assert_eq!(profile, Profile::named("main"));
    }

    #[test]
    fn test_store_path_from_storage_config() {
        let storage = StorageConfig {
            data_dir: Some(PathBuf::from("/tmp/katachi-data")),
            profile_name: "alt".to_string(),
        };
        let store = ProfileStore::new(&storage);
        assert_eq!(store.path(), Path::new("/tmp/katachi-data/profiles/alt.json"));
    }
}
