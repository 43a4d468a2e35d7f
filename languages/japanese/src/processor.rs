use std::path::Path;

use katachi_core::language::LanguageProcessor;
use katachi_types::ConjugationType;
use rand::Rng;

use crate::distractor::DistractorEngine;
use crate::kana;
use crate::lexicon::{Lexicon, WordEntry};
use crate::loader::LexiconLoader;

/// Japanese language processor
pub struct JapaneseProcessor {
    lexicon: Lexicon,
    engine: DistractorEngine<'static>,
}

impl Default for JapaneseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl JapaneseProcessor {
    /// Processor over the builtin lexicon only
    pub fn new() -> Self {
        Self::with_additional_lexicons(&[])
    }

    /// Builtin lexicon merged with the lexicon files at `additional_paths`
    pub fn with_additional_lexicons(additional_paths: &[String]) -> Self {
        let mut lexicon = LexiconLoader::load_builtin();

        for path in additional_paths {
            match LexiconLoader::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional lexicon from: {}", path);
                    lexicon = LexiconLoader::merge(lexicon, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load lexicon from {}: {}", path, e);
                }
            }
        }

        Self::from_lexicon(lexicon)
    }

    pub fn from_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            engine: DistractorEngine::default(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn distractors<R: Rng + ?Sized>(
        &self,
        word: &WordEntry,
        form: ConjugationType,
        rng: &mut R,
    ) -> Vec<String> {
        self.engine.generate(word, form, rng)
    }
}

impl LanguageProcessor for JapaneseProcessor {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn normalize(&self, text: &str) -> String {
        kana::to_hiragana(text)
    }
}
