use std::collections::{BTreeMap, HashMap};

use katachi_core::error::LoadError;
use katachi_types::{ConjugationType, JlptLevel, WordGroup, WordType};
use serde::{Deserialize, Serialize};

/// Correct surface form for each conjugation tag of one word
pub type Conjugations = BTreeMap<ConjugationType, String>;

/// Headword in each orthography; `kana` is the one conjugation works on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryForm {
    pub kanji: String,
    pub kana: String,
    #[serde(default)]
    pub romaji: String,
}

/// Lexicon word with its precomputed correct conjugations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordEntry {
    pub id: String,
    pub level: JlptLevel,
    pub group: WordGroup,
    pub word_type: WordType,
    pub dictionary_form: DictionaryForm,
    pub meaning: String,
    pub conjugations: Conjugations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jlpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_common: Option<bool>,
}

impl WordEntry {
    pub fn kana(&self) -> &str {
        &self.dictionary_form.kana
    }

    /// Kanji spelling when present, kana otherwise
    pub fn headword(&self) -> &str {
        if self.dictionary_form.kanji.is_empty() {
            &self.dictionary_form.kana
        } else {
            &self.dictionary_form.kanji
        }
    }

    pub fn correct_answer(&self, form: ConjugationType) -> Option<&str> {
        self.conjugations.get(&form).map(String::as_str)
    }

    /// Forms this word can legally be quizzed on
    pub fn quizzable_forms(&self) -> impl Iterator<Item = ConjugationType> + '_ {
        self.conjugations
            .keys()
            .copied()
            .filter(|c| c.applies_to(self.word_type))
    }
}

// JSON structures for the lexicon file format
#[derive(Debug, Deserialize)]
struct LexiconJson {
    #[serde(default)]
    version: Option<String>,
    words: Vec<WordEntryJson>,
}

#[derive(Debug, Deserialize)]
struct WordEntryJson {
    id: String,
    level: JlptLevel,
    group: WordGroup,
    #[serde(default)]
    word_type: Option<WordType>,
    dictionary_form: DictionaryForm,
    #[serde(default)]
    meaning: String,
    #[serde(default)]
    conjugations: HashMap<String, String>,
    #[serde(default)]
    jlpt: Option<String>,
    #[serde(default)]
    is_common: Option<bool>,
}

impl WordEntryJson {
    fn into_entry(self) -> WordEntry {
        let mut conjugations = Conjugations::new();
        for (tag, form) in self.conjugations {
            match ConjugationType::parse(&tag) {
                Some(conj) => {
                    conjugations.insert(conj, form);
                }
                None => {
                    tracing::warn!("Word {}: dropping unknown conjugation tag '{}'", self.id, tag);
                }
            }
        }

        WordEntry {
            word_type: self.word_type.unwrap_or_else(|| self.group.word_type()),
            id: self.id,
            level: self.level,
            group: self.group,
            dictionary_form: self.dictionary_form,
            meaning: self.meaning,
            conjugations,
            jlpt: self.jlpt,
            is_common: self.is_common,
        }
    }
}

#[derive(Serialize)]
struct LexiconJsonOut<'a> {
    version: &'a str,
    words: &'a [WordEntry],
}

/// Read-only word collection the quiz draws from
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    version: String,
    entries: Vec<WordEntry>,
    id_index: HashMap<String, usize>,
    /// Ids that appeared more than once in the source file
    duplicate_ids: Vec<String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        let mut lexicon = Self {
            version: "1.0".to_string(),
            ..Self::default()
        };
        for entry in entries {
            let id = entry.id.clone();
            if lexicon.insert(entry) {
                lexicon.duplicate_ids.push(id);
            }
        }
        lexicon
    }

    /// Parse a `{ "version", "words": [...] }` lexicon document
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: LexiconJson = serde_json::from_str(json_str)?;
        if data.words.is_empty() {
            return Err(LoadError::InvalidFormat("lexicon has no words".to_string()));
        }

        let mut lexicon = Self::from_entries(
            data.words
                .into_iter()
                .map(WordEntryJson::into_entry)
                .collect(),
        );
        if let Some(version) = data.version {
            lexicon.version = version;
        }
        Ok(lexicon)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&LexiconJsonOut {
            version: &self.version,
            words: &self.entries,
        })
    }

    /// Add an entry, replacing any earlier entry with the same id in place.
    /// Returns true when something was replaced.
    fn insert(&mut self, entry: WordEntry) -> bool {
        match self.id_index.get(&entry.id) {
            Some(&idx) => {
                self.entries[idx] = entry;
                true
            }
            None => {
                self.id_index.insert(entry.id.clone(), self.entries.len());
                self.entries.push(entry);
                false
            }
        }
    }

    pub fn duplicate_ids(&self) -> &[String] {
        &self.duplicate_ids
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&WordEntry> {
        self.id_index.get(id).and_then(|&idx| self.entries.get(idx))
    }

    /// Words whose level and word type are both selected
    pub fn filter(&self, levels: &[JlptLevel], word_types: &[WordType]) -> Vec<&WordEntry> {
        self.entries
            .iter()
            .filter(|e| levels.contains(&e.level) && word_types.contains(&e.word_type))
            .collect()
    }

    /// Merge another lexicon into this one
    /// Entries from `other` with an existing id override the old ones
    pub fn merge(mut self, other: Lexicon) -> Self {
        for entry in other.entries {
            if self.insert(entry) {
                tracing::debug!("Lexicon merge replaced an existing entry");
            }
        }
        self
    }
}
