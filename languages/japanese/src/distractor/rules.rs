//! Confusion rules: each one misapplies a piece of Japanese grammar the way
//! learners typically do and returns the wrong forms it produces.

use katachi_types::{ConjugationType, WordGroup};

use crate::conjugator::split_last;
use crate::lexicon::WordEntry;

/// The question a rule is asked to produce wrong answers for
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub word: &'a WordEntry,
    pub target: ConjugationType,
    pub correct: Option<&'a str>,
}

impl<'a> Query<'a> {
    pub fn new(word: &'a WordEntry, target: ConjugationType) -> Self {
        Self {
            word,
            target,
            correct: word.correct_answer(target),
        }
    }

    fn kana(&self) -> &'a str {
        self.word.kana()
    }

    /// Dictionary kana without its final character
    fn stem(&self) -> &'a str {
        split_last(self.kana()).map_or("", |(stem, _)| stem)
    }
}

/// A named, independent candidate generator
#[derive(Debug, Clone, Copy)]
pub struct ConfusionRule {
    pub name: &'static str,
    pub apply: fn(&Query<'_>) -> Vec<String>,
}

/// Rules in the order their candidates enter the pool
pub const RULE_CATALOG: &[ConfusionRule] = &[
    ConfusionRule {
        name: "class_swap",
        apply: class_swap,
    },
    ConfusionRule {
        name: "te_form_swap",
        apply: te_form_swap,
    },
    ConfusionRule {
        name: "adjective_crossover",
        apply: adjective_crossover,
    },
    ConfusionRule {
        name: "naive_concatenation",
        apply: naive_concatenation,
    },
    ConfusionRule {
        name: "irregular_override",
        apply: irregular_override,
    },
];

/// Ichidan endings glued onto a godan stem (the "ru" trap)
fn ichidan_ending(target: ConjugationType) -> Option<&'static str> {
    match target {
        ConjugationType::Polite => Some("ます"),
        ConjugationType::NegativePlain => Some("ない"),
        ConjugationType::TeForm => Some("て"),
        ConjugationType::PastPlain => Some("た"),
        ConjugationType::Volitional => Some("よう"),
        _ => None,
    }
}

/// Godan る-row endings glued onto an ichidan stem
fn godan_ending(target: ConjugationType) -> Option<&'static str> {
    match target {
        ConjugationType::NegativePlain => Some("らない"),
        ConjugationType::Polite => Some("ります"),
        ConjugationType::TeForm => Some("って"),
        _ => None,
    }
}

/// Conjugate a godan る-verb as ichidan, or an ichidan verb as godan
pub fn class_swap(query: &Query<'_>) -> Vec<String> {
    let ending = match query.word.group {
        WordGroup::Godan if query.kana().ends_with('る') => ichidan_ending(query.target),
        WordGroup::Ichidan => godan_ending(query.target),
        _ => None,
    };

    ending
        .map(|ending| format!("{}{ending}", query.stem()))
        .into_iter()
        .collect()
}

/// Connectors learners mix up when forming a godan te-form
pub const TE_CONNECTORS: [&str; 5] = ["って", "んで", "いて", "いで", "して"];

/// Every te-form sound change applied to a godan stem
pub fn te_form_swap(query: &Query<'_>) -> Vec<String> {
    if query.target != ConjugationType::TeForm || query.word.group != WordGroup::Godan {
        return Vec::new();
    }

    let stem = query.stem();
    TE_CONNECTORS
        .iter()
        .map(|connector| format!("{stem}{connector}"))
        .collect()
}

/// Inflect an i-adjective with na-adjective patterns and vice versa
pub fn adjective_crossover(query: &Query<'_>) -> Vec<String> {
    let suffix = match (query.word.group, query.target) {
        (WordGroup::IAdjective, ConjugationType::NegativePlain) => "じゃない",
        (WordGroup::IAdjective, ConjugationType::PastPlain) => "だった",
        (WordGroup::NaAdjective, ConjugationType::NegativePlain) => "くない",
        (WordGroup::NaAdjective, ConjugationType::PastPlain) => "かった",
        _ => return Vec::new(),
    };
    vec![format!("{}{suffix}", query.kana())]
}

/// Textbook ending bolted straight onto the dictionary form
pub fn naive_concatenation(query: &Query<'_>) -> Vec<String> {
    let ending = match query.target {
        ConjugationType::Polite => "ます",
        ConjugationType::NegativePlain => "ない",
        ConjugationType::PastPlain => "た",
        ConjugationType::TeForm => "て",
        _ => return Vec::new(),
    };
    vec![format!("{}{ending}", query.kana())]
}

/// Regularized forms of known exceptions
pub fn irregular_override(query: &Query<'_>) -> Vec<String> {
    match (query.kana(), query.target) {
        // く → いて, as if 行く followed the rule
        ("いく", ConjugationType::TeForm) => vec!["いいて".to_string()],
        _ => Vec::new(),
    }
}
