use std::path::Path;

use katachi_core::error::LoadError;

use crate::builtin;
use crate::lexicon::Lexicon;

pub struct LexiconLoader;

impl LexiconLoader {
    /// Starter vocabulary compiled into the binary
    pub fn load_builtin() -> Lexicon {
        let lexicon = builtin::lexicon();
        tracing::info!("Loaded {} builtin lexicon entries", lexicon.len());
        lexicon
    }

    /// Load a lexicon JSON file
    pub fn load_from_file(path: &Path) -> Result<Lexicon, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading lexicon from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let lexicon = Lexicon::from_json(&json)?;
        tracing::info!("Loaded {} lexicon entries from file", lexicon.len());
        Ok(lexicon)
    }

    /// Merge two lexicons (later entries override earlier ones by ID)
    pub fn merge(base: Lexicon, additional: Lexicon) -> Lexicon {
        base.merge(additional)
    }
}
