use katachi_types::{JlptLevel, WordGroup};

use crate::conjugator;
use crate::lexicon::{DictionaryForm, Lexicon, WordEntry};

type Seed = (&'static str, &'static str, &'static str, &'static str, WordGroup);

const VERBS_N5: &[Seed] = &[
    ("食べる", "たべる", "taberu", "to eat", WordGroup::Ichidan),
    ("飲む", "のむ", "nomu", "to drink", WordGroup::Godan),
    ("行く", "いく", "iku", "to go", WordGroup::Godan),
    ("来る", "くる", "kuru", "to come", WordGroup::Kuru),
    ("する", "する", "suru", "to do", WordGroup::Suru),
    ("書く", "かく", "kaku", "to write", WordGroup::Godan),
    ("読む", "よむ", "yomu", "to read", WordGroup::Godan),
    ("話す", "はなす", "hanasu", "to speak", WordGroup::Godan),
    ("聞く", "きく", "kiku", "to listen/ask", WordGroup::Godan),
    ("見る", "みる", "miru", "to see", WordGroup::Ichidan),
    ("寝る", "ねる", "neru", "to sleep", WordGroup::Ichidan),
    ("起きる", "おきる", "okiru", "to wake up", WordGroup::Ichidan),
    ("帰る", "かえる", "kaeru", "to return home", WordGroup::Godan),
    ("乗る", "のる", "noru", "to ride", WordGroup::Godan),
    ("買う", "かう", "kau", "to buy", WordGroup::Godan),
    ("会う", "あう", "au", "to meet", WordGroup::Godan),
    ("待つ", "まつ", "matsu", "to wait", WordGroup::Godan),
    ("持つ", "もつ", "motsu", "to hold", WordGroup::Godan),
    ("死ぬ", "しぬ", "shinu", "to die", WordGroup::Godan),
    ("飛ぶ", "とぶ", "tobu", "to fly", WordGroup::Godan),
    ("呼ぶ", "よぶ", "yobu", "to call", WordGroup::Godan),
    ("泳ぐ", "およぐ", "oyogu", "to swim", WordGroup::Godan),
    ("遊ぶ", "あそぶ", "asobu", "to play", WordGroup::Godan),
];

const ADJECTIVES_N5: &[Seed] = &[
    ("高い", "たかい", "takai", "expensive/high", WordGroup::IAdjective),
    ("安い", "やすい", "yasui", "cheap", WordGroup::IAdjective),
    ("大きい", "おおきい", "ookii", "big", WordGroup::IAdjective),
    ("小さい", "ちいさい", "chiisai", "small", WordGroup::IAdjective),
    ("新しい", "あたらしい", "atarashii", "new", WordGroup::IAdjective),
    ("古い", "ふるい", "furui", "old", WordGroup::IAdjective),
    ("いい", "いい", "ii", "good", WordGroup::IAdjective),
    ("静か", "しずか", "shizuka", "quiet", WordGroup::NaAdjective),
    ("賑やか", "にぎやか", "nigiyaka", "lively", WordGroup::NaAdjective),
    ("綺麗", "きれい", "kirei", "beautiful/clean", WordGroup::NaAdjective),
    ("有名", "ゆうめい", "yuumei", "famous", WordGroup::NaAdjective),
];

const VERBS_N4: &[Seed] = &[
    ("教える", "おしえる", "oshieru", "to teach", WordGroup::Ichidan),
    ("覚える", "おぼえる", "oboeru", "to remember", WordGroup::Ichidan),
    ("考える", "かんがえる", "kangaeru", "to think", WordGroup::Ichidan),
    ("決める", "きめる", "kimeru", "to decide", WordGroup::Ichidan),
    ("調べる", "しらべる", "shiraberu", "to investigate", WordGroup::Ichidan),
    ("忘れる", "わすれる", "wasureru", "to forget", WordGroup::Ichidan),
    ("笑う", "わらう", "warau", "to laugh", WordGroup::Godan),
    ("怒る", "おこる", "okoru", "to get angry", WordGroup::Godan),
    ("頼む", "たのむ", "tanomu", "to request", WordGroup::Godan),
    ("頑張る", "がんばる", "ganbaru", "to do one's best", WordGroup::Godan),
    ("勉強する", "べんきょうする", "benkyousuru", "to study", WordGroup::Suru),
];

fn build(seeds: &[Seed], level: JlptLevel, id_prefix: &str) -> Vec<WordEntry> {
    seeds
        .iter()
        .filter_map(|&(kanji, kana, romaji, meaning, group)| {
            let Some(conjugations) = conjugator::conjugate(kana, group) else {
                tracing::warn!("Builtin word {} cannot be conjugated as {}", kana, group.as_str());
                return None;
            };
            Some(WordEntry {
                id: format!("{id_prefix}_{romaji}"),
                level,
                group,
                word_type: group.word_type(),
                dictionary_form: DictionaryForm {
                    kanji: kanji.to_string(),
                    kana: kana.to_string(),
                    romaji: romaji.to_string(),
                },
                meaning: meaning.to_string(),
                conjugations,
                jlpt: Some(level.as_str().to_lowercase()),
                is_common: Some(true),
            })
        })
        .collect()
}

/// Starter vocabulary compiled into the binary
pub fn lexicon() -> Lexicon {
    let mut entries = build(VERBS_N5, JlptLevel::N5, "v");
    entries.extend(build(ADJECTIVES_N5, JlptLevel::N5, "a"));
    entries.extend(build(VERBS_N4, JlptLevel::N4, "v"));
    Lexicon::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use katachi_types::{ConjugationType, WordType};

    #[test]
    fn test_every_seed_conjugates() {
        let lexicon = lexicon();
        assert_eq!(
            lexicon.len(),
            VERBS_N5.len() + ADJECTIVES_N5.len() + VERBS_N4.len()
        );
        assert!(lexicon.duplicate_ids().is_empty());
    }

    #[test]
    fn test_known_entries() {
        let lexicon = lexicon();
        let kaku = lexicon.get("v_kaku").unwrap();
        assert_eq!(kaku.correct_answer(ConjugationType::TeForm), Some("かいて"));
        assert_eq!(kaku.correct_answer(ConjugationType::Polite), Some("かきます"));

        let ii = lexicon.get("a_ii").unwrap();
        assert_eq!(ii.word_type, WordType::IAdjective);
        assert_eq!(ii.correct_answer(ConjugationType::PastPlain), Some("よかった"));
    }
}
