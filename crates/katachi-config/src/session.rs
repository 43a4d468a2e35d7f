use katachi_types::{ConjugationType, JlptLevel, WordType, conjs_for_word_type};
use serde::{Deserialize, Serialize};

pub const MIN_BATCH_SIZE: usize = 5;
pub const MAX_BATCH_SIZE: usize = 30;

fn default_levels() -> Vec<JlptLevel> {
    vec![JlptLevel::N5]
}

fn default_word_types() -> Vec<WordType> {
    WordType::ALL.to_vec()
}

fn default_categories() -> Vec<ConjugationType> {
    vec![
        ConjugationType::TeForm,
        ConjugationType::Polite,
        ConjugationType::NegativePlain,
    ]
}

fn default_batch_size() -> usize {
    10
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    /// Pick one of four options
    #[default]
    Choice,
    /// Type the answer in kana or romaji
    Input,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(default = "default_levels")]
    pub levels: Vec<JlptLevel>,
    #[serde(default = "default_word_types")]
    pub word_types: Vec<WordType>,
    #[serde(default = "default_categories")]
    pub categories: Vec<ConjugationType>,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default)]
    pub mode: QuizMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            word_types: default_word_types(),
            categories: default_categories(),
            batch_size: default_batch_size(),
            mode: QuizMode::default(),
        }
    }
}

/// Union of the forms legal for any of `word_types`, in canonical order
pub fn available_forms(word_types: &[WordType]) -> Vec<ConjugationType> {
    ConjugationType::ALL
        .into_iter()
        .filter(|c| {
            word_types
                .iter()
                .any(|wt| conjs_for_word_type(*wt).contains(c))
        })
        .collect()
}

impl SessionConfig {
    pub fn available_forms(&self) -> Vec<ConjugationType> {
        available_forms(&self.word_types)
    }

    /// Selected categories that at least one selected word type can take
    pub fn valid_categories(&self) -> Vec<ConjugationType> {
        let available = self.available_forms();
        self.categories
            .iter()
            .copied()
            .filter(|c| available.contains(c))
            .collect()
    }

    /// Flip a level; the last selected level cannot be removed
    pub fn toggle_level(&mut self, level: JlptLevel) {
        if let Some(pos) = self.levels.iter().position(|l| *l == level) {
            if self.levels.len() > 1 {
                self.levels.remove(pos);
            }
        } else {
            self.levels.push(level);
        }
    }

    /// Flip a word type, dropping categories the remaining types cannot take
    pub fn toggle_word_type(&mut self, word_type: WordType) {
        let mut word_types = self.word_types.clone();
        if let Some(pos) = word_types.iter().position(|wt| *wt == word_type) {
            word_types.remove(pos);
        } else {
            word_types.push(word_type);
        }
        if word_types.is_empty() {
            return;
        }

        let available = available_forms(&word_types);
        let categories: Vec<ConjugationType> = self
            .categories
            .iter()
            .copied()
            .filter(|c| available.contains(c))
            .collect();

        self.word_types = word_types;
        self.categories = if categories.is_empty() {
            vec![ConjugationType::Polite]
        } else {
            categories
        };
    }

    /// Flip a category; the last selected category cannot be removed
    pub fn toggle_category(&mut self, category: ConjugationType) {
        if let Some(pos) = self.categories.iter().position(|c| *c == category) {
            if self.categories.len() > 1 {
                self.categories.remove(pos);
            }
        } else {
            self.categories.push(category);
        }
    }

    pub fn select_all_forms(&mut self) {
        let available = self.available_forms();
        if !available.is_empty() {
            self.categories = available;
        }
    }

    pub fn set_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size.clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE);
    }

    /// Switch to exactly `levels` one toggle at a time; empty leaves the selection alone
    pub fn select_levels(&mut self, levels: &[JlptLevel]) {
        for level in levels {
            if !self.levels.contains(level) {
                self.toggle_level(*level);
            }
        }
        for level in self.levels.clone() {
            if !levels.is_empty() && !levels.contains(&level) {
                self.toggle_level(level);
            }
        }
    }

    /// Like `select_levels`; categories the new types cannot take are dropped on the way
    pub fn select_word_types(&mut self, word_types: &[WordType]) {
        for word_type in word_types {
            if !self.word_types.contains(word_type) {
                self.toggle_word_type(*word_type);
            }
        }
        for word_type in self.word_types.clone() {
            if !word_types.is_empty() && !word_types.contains(&word_type) {
                self.toggle_word_type(word_type);
            }
        }
    }

    pub fn select_categories(&mut self, categories: &[ConjugationType]) {
        for category in categories {
            if !self.categories.contains(category) {
                self.toggle_category(*category);
            }
        }
        for category in self.categories.clone() {
            if !categories.is_empty() && !categories.contains(&category) {
                self.toggle_category(category);
            }
        }
    }

    /// Restore the selection rules on a config read from disk or edited by hand:
    /// nothing empty, only legal categories (polite when none is left), batch in range
    pub fn normalize(&mut self) {
        if self.levels.is_empty() {
            self.levels = default_levels();
        }
        if self.word_types.is_empty() {
            self.word_types = default_word_types();
        }
        let categories = self.valid_categories();
        self.categories = if categories.is_empty() {
            vec![ConjugationType::Polite]
        } else {
            categories
        };
        self.set_batch_size(self.batch_size);
    }

    /// Layer command-line choices over saved settings
    pub fn apply(&mut self, overrides: &SessionOverrides) {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(batch_size) = overrides.batch_size {
            self.batch_size = batch_size;
        }
        self.select_levels(&overrides.levels);
        self.select_word_types(&overrides.word_types);
        if overrides.all_forms {
            self.select_all_forms();
        } else {
            self.select_categories(&overrides.categories);
        }
        self.normalize();
    }
}

/// Session settings given for one run; empty lists keep the saved choice
#[derive(Clone, Debug, Default)]
pub struct SessionOverrides {
    pub mode: Option<QuizMode>,
    pub batch_size: Option<usize>,
    pub levels: Vec<JlptLevel>,
    pub word_types: Vec<WordType>,
    pub categories: Vec<ConjugationType>,
    pub all_forms: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_level_is_kept() {
        let mut config = SessionConfig::default();
        config.toggle_level(JlptLevel::N5);
        assert_eq!(config.levels, vec![JlptLevel::N5]);

        config.toggle_level(JlptLevel::N4);
        config.toggle_level(JlptLevel::N5);
        assert_eq!(config.levels, vec![JlptLevel::N4]);
    }

    #[test]
    fn test_dropping_verbs_removes_verb_only_categories() {
        let mut config = SessionConfig {
            categories: vec![ConjugationType::Volitional, ConjugationType::TeForm],
            ..SessionConfig::default()
        };
        config.toggle_word_type(WordType::Verb);
        assert_eq!(config.categories, vec![ConjugationType::TeForm]);
    }

    #[test]
    fn test_dropping_verbs_falls_back_to_polite() {
        let mut config = SessionConfig {
            categories: vec![ConjugationType::Potential],
            ..SessionConfig::default()
        };
        config.toggle_word_type(WordType::Verb);
        assert_eq!(config.categories, vec![ConjugationType::Polite]);
    }

    #[test]
    fn test_last_word_type_is_kept() {
        let mut config = SessionConfig {
            word_types: vec![WordType::NaAdjective],
            ..SessionConfig::default()
        };
        config.toggle_word_type(WordType::NaAdjective);
        assert_eq!(config.word_types, vec![WordType::NaAdjective]);
    }

    #[test]
    fn test_select_all_forms_for_adjectives() {
        let mut config = SessionConfig {
            word_types: vec![WordType::IAdjective],
            ..SessionConfig::default()
        };
        config.select_all_forms();
        assert_eq!(config.categories.len(), 10);
        assert!(!config.categories.contains(&ConjugationType::Imperative));
    }

    #[test]
    fn test_batch_size_is_clamped() {
        let mut config = SessionConfig::default();
        config.set_batch_size(100);
        assert_eq!(config.batch_size, MAX_BATCH_SIZE);
        config.set_batch_size(1);
        assert_eq!(config.batch_size, MIN_BATCH_SIZE);
    }

    #[test]
    fn test_word_type_override_drops_verb_only_categories() {
        let mut config = SessionConfig {
            categories: vec![ConjugationType::Imperative],
            ..SessionConfig::default()
        };
        config.apply(&SessionOverrides {
            word_types: vec![WordType::IAdjective],
            ..SessionOverrides::default()
        });
        assert_eq!(config.word_types, vec![WordType::IAdjective]);
        assert_eq!(config.categories, vec![ConjugationType::Polite]);
        assert_eq!(config.valid_categories(), vec![ConjugationType::Polite]);
    }

    #[test]
    fn test_overrides_replace_selections() {
        let mut config = SessionConfig::default();
        config.apply(&SessionOverrides {
            mode: Some(QuizMode::Input),
            batch_size: Some(50),
            levels: vec![JlptLevel::N4],
            categories: vec![ConjugationType::Volitional, ConjugationType::PastPlain],
            ..SessionOverrides::default()
        });
        assert_eq!(config.mode, QuizMode::Input);
        assert_eq!(config.batch_size, MAX_BATCH_SIZE);
        assert_eq!(config.levels, vec![JlptLevel::N4]);
        assert_eq!(
            config.categories,
            vec![ConjugationType::Volitional, ConjugationType::PastPlain]
        );
    }

    #[test]
    fn test_illegal_forms_for_override_fall_back_to_polite() {
        let mut config = SessionConfig::default();
        config.apply(&SessionOverrides {
            word_types: vec![WordType::NaAdjective],
            categories: vec![ConjugationType::Potential],
            ..SessionOverrides::default()
        });
        assert_eq!(config.categories, vec![ConjugationType::Polite]);
    }

    #[test]
    fn test_all_forms_override() {
        let mut config = SessionConfig::default();
        config.apply(&SessionOverrides {
            word_types: vec![WordType::IAdjective],
            all_forms: true,
            ..SessionOverrides::default()
        });
        assert_eq!(config.categories.len(), 10);
    }

    #[test]
    fn test_empty_overrides_keep_saved_choice() {
        let saved = SessionConfig {
            levels: vec![JlptLevel::N4, JlptLevel::N5],
            categories: vec![ConjugationType::TeForm],
            ..SessionConfig::default()
        };
        let mut config = saved.clone();
        config.apply(&SessionOverrides::default());
        assert_eq!(config, saved);
    }

    #[test]
    fn test_normalize_repairs_hand_edited_config() {
        let mut config = SessionConfig {
            levels: vec![],
            word_types: vec![],
            categories: vec![],
            batch_size: 2,
            ..SessionConfig::default()
        };
        config.normalize();
        assert_eq!(config.levels, vec![JlptLevel::N5]);
        assert_eq!(config.word_types, WordType::ALL.to_vec());
        assert_eq!(config.categories, vec![ConjugationType::Polite]);
        assert_eq!(config.batch_size, MIN_BATCH_SIZE);
    }

    #[test]
    fn test_partial_json_backfills_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"mode":"input"}"#).unwrap();
        assert_eq!(config.mode, QuizMode::Input);
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.categories, default_categories());
    }
}
