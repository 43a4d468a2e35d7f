pub mod builtin;
pub mod conjugator;
pub mod distractor;
pub mod kana;
pub mod lexicon;
pub mod loader;
pub mod processor;
pub mod validate;

pub use conjugator::conjugate;
pub use distractor::{ConfusionRule, DistractorEngine, RULE_CATALOG, generate_distractors};
pub use lexicon::{Conjugations, DictionaryForm, Lexicon, WordEntry};
pub use loader::LexiconLoader;
pub use processor::JapaneseProcessor;
pub use validate::{ValidationIssue, ValidationReport, validate_entry, validate_lexicon};
