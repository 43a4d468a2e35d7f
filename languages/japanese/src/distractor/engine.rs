use indexmap::IndexSet;
use katachi_types::ConjugationType;
use rand::Rng;
use rand::seq::SliceRandom;

use super::rules::{ConfusionRule, Query, RULE_CATALOG};
use crate::lexicon::WordEntry;

/// Wrong answers shown next to the correct one
pub const DISTRACTOR_COUNT: usize = 3;

/// Size the candidate pool is padded up to before sampling
pub const CANDIDATE_POOL_SIZE: usize = 10;

/// Runs a rule catalog over a word and samples the wrong answers
#[derive(Debug, Clone, Copy)]
pub struct DistractorEngine<'r> {
    rules: &'r [ConfusionRule],
}

impl Default for DistractorEngine<'static> {
    fn default() -> Self {
        Self::new(RULE_CATALOG)
    }
}

impl<'r> DistractorEngine<'r> {
    pub fn new(rules: &'r [ConfusionRule]) -> Self {
        Self { rules }
    }

    /// Rule-generated candidates, in catalog order, without the correct answer
    pub fn rule_candidates(&self, word: &WordEntry, target: ConjugationType) -> IndexSet<String> {
        let query = Query::new(word, target);
        let mut pool = IndexSet::new();

        for rule in self.rules {
            let produced = (rule.apply)(&query);
            tracing::trace!("rule {} produced {:?} for {}", rule.name, produced, word.id);
            pool.extend(produced);
        }

        pool.retain(|c| !c.is_empty() && Some(c.as_str()) != query.correct);
        pool
    }

    /// Rule candidates padded with the word's other correct forms
    pub fn candidate_pool<R: Rng + ?Sized>(
        &self,
        word: &WordEntry,
        target: ConjugationType,
        rng: &mut R,
    ) -> IndexSet<String> {
        let correct = word.correct_answer(target);
        let mut pool = self.rule_candidates(word, target);

        if pool.len() < CANDIDATE_POOL_SIZE {
            let mut others: Vec<&String> = word
                .conjugations
                .values()
                .filter(|form| !form.is_empty() && Some(form.as_str()) != correct)
                .collect();
            others.shuffle(rng);

            for form in others {
                if pool.len() >= CANDIDATE_POOL_SIZE {
                    break;
                }
                pool.insert(form.clone());
            }
        }

        pool
    }

    /// Up to three distinct wrong answers in random order
    pub fn generate<R: Rng + ?Sized>(
        &self,
        word: &WordEntry,
        target: ConjugationType,
        rng: &mut R,
    ) -> Vec<String> {
        if !target.applies_to(word.word_type) {
            tracing::trace!(
                "{} is not a form of {} word {}",
                target.as_str(),
                word.word_type.as_str(),
                word.id
            );
        }

        let mut pool: Vec<String> = self.candidate_pool(word, target, rng).into_iter().collect();
        pool.shuffle(rng);
        pool.truncate(DISTRACTOR_COUNT);
        pool
    }
}

/// Distractors for `word` quizzed on `target`, using the full rule catalog
pub fn generate_distractors<R: Rng + ?Sized>(
    word: &WordEntry,
    target: ConjugationType,
    rng: &mut R,
) -> Vec<String> {
    DistractorEngine::default().generate(word, target, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conjugator::conjugate;
    use crate::lexicon::{Conjugations, DictionaryForm};
    use katachi_types::{JlptLevel, WordGroup};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn word(id: &str, kana: &str, group: WordGroup) -> WordEntry {
        WordEntry {
            id: id.to_string(),
            level: JlptLevel::N5,
            group,
            word_type: group.word_type(),
            dictionary_form: DictionaryForm {
                kanji: String::new(),
                kana: kana.to_string(),
                romaji: String::new(),
            },
            meaning: String::new(),
            conjugations: conjugate(kana, group).unwrap_or_default(),
            jlpt: None,
            is_common: None,
        }
    }

    #[test]
    fn test_kaku_te_form_end_to_end() {
        let kaku = word("v_kaku", "かく", WordGroup::Godan);
        let engine = DistractorEngine::default();

        let rules = engine.rule_candidates(&kaku, ConjugationType::TeForm);
        let rules: Vec<&str> = rules.iter().map(String::as_str).collect();
        assert_eq!(rules, ["かって", "かんで", "かいで", "かして", "かくて"]);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pool = engine.candidate_pool(&kaku, ConjugationType::TeForm, &mut rng);
        assert_eq!(pool.len(), CANDIDATE_POOL_SIZE);
        assert!(!pool.contains("かいて"));

        let out = engine.generate(&kaku, ConjugationType::TeForm, &mut rng);
        assert_eq!(out.len(), DISTRACTOR_COUNT);
        for d in &out {
            assert_ne!(d, "かいて");
            assert!(kaku.conjugations.values().any(|f| f == d) || rules.contains(&d.as_str()));
        }
    }

    #[test]
    fn test_iku_regularized_te_form_in_pool() {
        let iku = word("v_iku", "いく", WordGroup::Godan);
        let pool = DistractorEngine::default().rule_candidates(&iku, ConjugationType::TeForm);
        assert!(pool.contains("いいて"));
        // The true form comes out of the te-form swap and must be filtered
        assert!(!pool.contains("いって"));
    }

    #[test]
    fn test_adjective_crossover_in_pool() {
        let engine = DistractorEngine::default();

        let takai = word("a_takai", "たかい", WordGroup::IAdjective);
        let pool = engine.rule_candidates(&takai, ConjugationType::NegativePlain);
        assert!(pool.contains("たかいじゃない"));

        let shizuka = word("a_shizuka", "しずか", WordGroup::NaAdjective);
        let pool = engine.rule_candidates(&shizuka, ConjugationType::PastPlain);
        assert!(pool.contains("しずかかった"));
    }

    #[test]
    fn test_never_returns_correct_answer() {
        let words = [
            word("v_kaku", "かく", WordGroup::Godan),
            word("v_noru", "のる", WordGroup::Godan),
            word("v_iku", "いく", WordGroup::Godan),
            word("v_taberu", "たべる", WordGroup::Ichidan),
            word("v_suru", "する", WordGroup::Suru),
            word("a_ii", "いい", WordGroup::IAdjective),
            word("a_kirei", "きれい", WordGroup::NaAdjective),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for w in &words {
            for target in w.quizzable_forms().collect::<Vec<_>>() {
                let correct = w.correct_answer(target).unwrap();
                for _ in 0..100 {
                    let out = generate_distractors(w, target, &mut rng);
                    assert!(out.len() <= DISTRACTOR_COUNT);
                    assert!(!out.iter().any(|d| d == correct), "{} {:?}", w.id, target);
                }
            }
        }
    }

    #[test]
    fn test_full_entry_always_gets_three() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let miru = word("v_miru", "みる", WordGroup::Ichidan);
        for target in ConjugationType::ALL {
            let out = generate_distractors(&miru, target, &mut rng);
            assert_eq!(out.len(), DISTRACTOR_COUNT);
            let unique: IndexSet<_> = out.iter().collect();
            assert_eq!(unique.len(), out.len());
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let kaku = word("v_kaku", "かく", WordGroup::Godan);
        let a = generate_distractors(&kaku, ConjugationType::Polite, &mut ChaCha8Rng::seed_from_u64(99));
        let b = generate_distractors(&kaku, ConjugationType::Polite, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sparse_entry_degrades() {
        let mut sparse = word("a_shizuka", "しずか", WordGroup::NaAdjective);
        sparse.conjugations = Conjugations::from([(
            ConjugationType::NegativePolite,
            "しずかじゃありません".to_string(),
        )]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(generate_distractors(&sparse, ConjugationType::NegativePolite, &mut rng).is_empty());

        sparse
            .conjugations
            .insert(ConjugationType::Polite, "しずかです".to_string());
        assert_eq!(
            generate_distractors(&sparse, ConjugationType::NegativePolite, &mut rng),
            ["しずかです"]
        );
    }

    #[test]
    fn test_illegal_form_does_not_panic() {
        let takai = word("a_takai", "たかい", WordGroup::IAdjective);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let out = generate_distractors(&takai, ConjugationType::Imperative, &mut rng);
        assert_eq!(out.len(), DISTRACTOR_COUNT);
    }

    #[test]
    fn test_custom_catalog() {
        let engine = DistractorEngine::new(&RULE_CATALOG[3..4]);
        let kaku = word("v_kaku", "かく", WordGroup::Godan);
        let pool = engine.rule_candidates(&kaku, ConjugationType::TeForm);
        assert_eq!(pool.len(), 1);
        assert!(pool.contains("かくて"));
    }
}
