use serde::{Deserialize, Serialize};

/// Grammatical conjugation class of a lexicon word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WordGroup {
    #[serde(rename = "godan")]
    Godan,
    #[serde(rename = "ichidan")]
    Ichidan,
    #[serde(rename = "suru")]
    Suru,
    #[serde(rename = "kuru")]
    Kuru,
    #[serde(rename = "i-adj")]
    IAdjective,
    #[serde(rename = "na-adj")]
    NaAdjective,
}

impl WordGroup {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "godan" => Some(WordGroup::Godan),
            "ichidan" => Some(WordGroup::Ichidan),
            "suru" => Some(WordGroup::Suru),
            "kuru" => Some(WordGroup::Kuru),
            "i-adj" => Some(WordGroup::IAdjective),
            "na-adj" => Some(WordGroup::NaAdjective),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordGroup::Godan => "godan",
            WordGroup::Ichidan => "ichidan",
            WordGroup::Suru => "suru",
            WordGroup::Kuru => "kuru",
            WordGroup::IAdjective => "i-adj",
            WordGroup::NaAdjective => "na-adj",
        }
    }

    /// Coarse word type implied by the group
    pub fn word_type(&self) -> WordType {
        match self {
            WordGroup::Godan | WordGroup::Ichidan | WordGroup::Suru | WordGroup::Kuru => {
                WordType::Verb
            }
            WordGroup::IAdjective => WordType::IAdjective,
            WordGroup::NaAdjective => WordType::NaAdjective,
        }
    }
}

/// Coarse part of speech; decides which conjugation types apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WordType {
    #[serde(rename = "verb")]
    Verb,
    #[serde(rename = "i-adj")]
    IAdjective,
    #[serde(rename = "na-adj")]
    NaAdjective,
}

impl WordType {
    pub const ALL: [WordType; 3] = [WordType::Verb, WordType::IAdjective, WordType::NaAdjective];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "verb" => Some(WordType::Verb),
            "i-adj" => Some(WordType::IAdjective),
            "na-adj" => Some(WordType::NaAdjective),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordType::Verb => "verb",
            WordType::IAdjective => "i-adj",
            WordType::NaAdjective => "na-adj",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WordType::Verb => "動詞",
            WordType::IAdjective => "い形容詞",
            WordType::NaAdjective => "な形容詞",
        }
    }
}

/// The sixteen quizzable conjugation forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjugationType {
    Polite,
    NegativePlain,
    NegativePolite,
    PastPlain,
    PastPolite,
    PastNegativePlain,
    PastNegativePolite,
    TeForm,
    Potential,
    Passive,
    Causative,
    CausativePassive,
    Imperative,
    Volitional,
    ConditionalBa,
    ConditionalTara,
}

/// Forms every word type conjugates into
pub const SHARED_CONJS: [ConjugationType; 10] = [
    ConjugationType::Polite,
    ConjugationType::NegativePlain,
    ConjugationType::NegativePolite,
    ConjugationType::PastPlain,
    ConjugationType::PastPolite,
    ConjugationType::PastNegativePlain,
    ConjugationType::PastNegativePolite,
    ConjugationType::TeForm,
    ConjugationType::ConditionalBa,
    ConjugationType::ConditionalTara,
];

/// Forms that only exist for verbs
pub const VERB_ONLY_CONJS: [ConjugationType; 6] = [
    ConjugationType::Potential,
    ConjugationType::Passive,
    ConjugationType::Causative,
    ConjugationType::CausativePassive,
    ConjugationType::Imperative,
    ConjugationType::Volitional,
];

/// Legal conjugation types for a word type, shared forms first
pub fn conjs_for_word_type(word_type: WordType) -> Vec<ConjugationType> {
    match word_type {
        WordType::Verb => SHARED_CONJS.iter().chain(VERB_ONLY_CONJS.iter()).copied().collect(),
        WordType::IAdjective | WordType::NaAdjective => SHARED_CONJS.to_vec(),
    }
}

impl ConjugationType {
    pub const ALL: [ConjugationType; 16] = [
        ConjugationType::Polite,
        ConjugationType::NegativePlain,
        ConjugationType::NegativePolite,
        ConjugationType::PastPlain,
        ConjugationType::PastPolite,
        ConjugationType::PastNegativePlain,
        ConjugationType::PastNegativePolite,
        ConjugationType::TeForm,
        ConjugationType::Potential,
        ConjugationType::Passive,
        ConjugationType::Causative,
        ConjugationType::CausativePassive,
        ConjugationType::Imperative,
        ConjugationType::Volitional,
        ConjugationType::ConditionalBa,
        ConjugationType::ConditionalTara,
    ];

    /// Parse the snake_case tag used in lexicon files
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConjugationType::Polite => "polite",
            ConjugationType::NegativePlain => "negative_plain",
            ConjugationType::NegativePolite => "negative_polite",
            ConjugationType::PastPlain => "past_plain",
            ConjugationType::PastPolite => "past_polite",
            ConjugationType::PastNegativePlain => "past_negative_plain",
            ConjugationType::PastNegativePolite => "past_negative_polite",
            ConjugationType::TeForm => "te_form",
            ConjugationType::Potential => "potential",
            ConjugationType::Passive => "passive",
            ConjugationType::Causative => "causative",
            ConjugationType::CausativePassive => "causative_passive",
            ConjugationType::Imperative => "imperative",
            ConjugationType::Volitional => "volitional",
            ConjugationType::ConditionalBa => "conditional_ba",
            ConjugationType::ConditionalTara => "conditional_tara",
        }
    }

    /// Label shown on the question card
    pub fn label(&self) -> &'static str {
        match self {
            ConjugationType::Polite => "ます形",
            ConjugationType::NegativePlain => "ない形",
            ConjugationType::NegativePolite => "ません形",
            ConjugationType::PastPlain => "た形",
            ConjugationType::PastPolite => "ました形",
            ConjugationType::PastNegativePlain => "なかった形",
            ConjugationType::PastNegativePolite => "ませんでした形",
            ConjugationType::TeForm => "て形",
            ConjugationType::Potential => "可能形",
            ConjugationType::Passive => "受身形",
            ConjugationType::Causative => "使役形",
            ConjugationType::CausativePassive => "使役受身形",
            ConjugationType::Imperative => "命令形",
            ConjugationType::Volitional => "意向形",
            ConjugationType::ConditionalBa => "ば形",
            ConjugationType::ConditionalTara => "たら形",
        }
    }

    pub fn is_verb_only(&self) -> bool {
        VERB_ONLY_CONJS.contains(self)
    }

    pub fn applies_to(&self, word_type: WordType) -> bool {
        word_type == WordType::Verb || !self.is_verb_only()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JlptLevel {
    N5, // Beginner
    N4, // Elementary
    N3, // Intermediate
    N2, // Upper intermediate
    N1, // Advanced
}

impl JlptLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "N5" => Some(JlptLevel::N5),
            "N4" => Some(JlptLevel::N4),
            "N3" => Some(JlptLevel::N3),
            "N2" => Some(JlptLevel::N2),
            "N1" => Some(JlptLevel::N1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5",
            JlptLevel::N4 => "N4",
            JlptLevel::N3 => "N3",
            JlptLevel::N2 => "N2",
            JlptLevel::N1 => "N1",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5 (Beginner)",
            JlptLevel::N4 => "N4 (Elementary)",
            JlptLevel::N3 => "N3 (Intermediate)",
            JlptLevel::N2 => "N2 (Upper Intermediate)",
            JlptLevel::N1 => "N1 (Advanced)",
        }
    }
}
