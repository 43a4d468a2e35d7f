pub mod engine;
pub mod rules;

pub use engine::{CANDIDATE_POOL_SIZE, DISTRACTOR_COUNT, DistractorEngine, generate_distractors};
pub use rules::{ConfusionRule, Query, RULE_CATALOG};
