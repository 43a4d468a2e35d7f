use std::collections::HashSet;

use katachi_types::{ConjugationType, WordGroup, WordType, conjs_for_word_type};

use crate::conjugator;
use crate::kana::is_hiragana;
use crate::lexicon::{Lexicon, WordEntry};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("dictionary kana is empty")]
    EmptyKana,

    #[error("dictionary kana '{0}' is not hiragana")]
    NonHiraganaKana(String),

    #[error("group {} does not conjugate as a {}", .group.as_str(), .word_type.as_str())]
    GroupTypeMismatch { group: WordGroup, word_type: WordType },

    #[error("missing conjugation '{}'", .0.as_str())]
    MissingConjugation(ConjugationType),

    #[error("conjugation '{}' does not apply to this word type", .0.as_str())]
    IllegalConjugation(ConjugationType),

    #[error("'{}' is '{found}', expected '{expected}'", .form.as_str())]
    IncorrectForm {
        form: ConjugationType,
        found: String,
        expected: String,
    },

    #[error("duplicate id")]
    DuplicateId,
}

/// Check one entry against the conjugation tables for its word type
pub fn validate_entry(entry: &WordEntry) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let kana = entry.kana();

    if kana.is_empty() {
        issues.push(ValidationIssue::EmptyKana);
    } else if !kana.chars().all(|c| is_hiragana(c) || c == 'ー') {
        issues.push(ValidationIssue::NonHiraganaKana(kana.to_string()));
    }

    if entry.group.word_type() != entry.word_type {
        issues.push(ValidationIssue::GroupTypeMismatch {
            group: entry.group,
            word_type: entry.word_type,
        });
    }

    let required = conjs_for_word_type(entry.word_type);
    for form in &required {
        if !entry.conjugations.contains_key(form) {
            issues.push(ValidationIssue::MissingConjugation(*form));
        }
    }
    for form in entry.conjugations.keys() {
        if !required.contains(form) {
            issues.push(ValidationIssue::IllegalConjugation(*form));
        }
    }

    // Only compare when the reference conjugator understands the word
    if let Some(expected) = conjugator::conjugate(kana, entry.group) {
        for (form, expected) in expected {
            if let Some(found) = entry.conjugations.get(&form) {
                if *found != expected {
                    issues.push(ValidationIssue::IncorrectForm {
                        form,
                        found: found.clone(),
                        expected,
                    });
                }
            }
        }
    }

    issues
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub entries_checked: usize,
    /// (word id, issue) in lexicon order
    pub problems: Vec<(String, ValidationIssue)>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }

    /// Number of distinct words with at least one problem
    pub fn failing_entries(&self) -> usize {
        self.problems
            .iter()
            .map(|(id, _)| id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

pub fn validate_lexicon(lexicon: &Lexicon) -> ValidationReport {
    let mut report = ValidationReport::default();

    for id in lexicon.duplicate_ids() {
        report.problems.push((id.clone(), ValidationIssue::DuplicateId));
    }

    for entry in lexicon.entries() {
        report.entries_checked += 1;
        for issue in validate_entry(entry) {
            report.problems.push((entry.id.clone(), issue));
        }
    }

    tracing::info!(
        "Validated {} entries, {} problems",
        report.entries_checked,
        report.problems.len()
    );
    report
}
