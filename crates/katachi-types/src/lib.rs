pub mod types;

pub use types::{
    ConjugationType, JlptLevel, SHARED_CONJS, VERB_ONLY_CONJS, WordGroup, WordType,
    conjs_for_word_type,
};
