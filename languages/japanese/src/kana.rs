use katachi_core::preprocess::{DefaultPreprocessor, Preprocessor};

/// Hiragana → romaji, digraphs before single kana
const KANA_ROMAJI: &[(&str, &str)] = &[
    ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"),
    ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"),
    ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"),
    ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
    ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
    ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
    ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
    ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
    ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
    ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
    ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
    ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
    ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
    ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
    ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"),
    ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
    ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
    ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
    ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
    ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
    ("わ", "wa"), ("を", "wo"), ("ん", "n"),
    ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
    ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
    ("だ", "da"), ("ぢ", "di"), ("づ", "du"), ("で", "de"), ("ど", "do"),
    ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
    ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
    ("ー", ""),
];

/// Romaji → hiragana, IME spellings included; looked up longest first
const ROMAJI_KANA: &[(&str, &str)] = &[
    ("sha", "しゃ"), ("shu", "しゅ"), ("sho", "しょ"), ("shi", "し"),
    ("sya", "しゃ"), ("syu", "しゅ"), ("syo", "しょ"),
    ("cha", "ちゃ"), ("chu", "ちゅ"), ("cho", "ちょ"), ("chi", "ち"),
    ("tya", "ちゃ"), ("tyu", "ちゅ"), ("tyo", "ちょ"),
    ("tsu", "つ"), ("xtu", "っ"), ("ltu", "っ"),
    ("jya", "じゃ"), ("jyu", "じゅ"), ("jyo", "じょ"),
    ("zya", "じゃ"), ("zyu", "じゅ"), ("zyo", "じょ"),
    ("kya", "きゃ"), ("kyu", "きゅ"), ("kyo", "きょ"),
    ("nya", "にゃ"), ("nyu", "にゅ"), ("nyo", "にょ"),
    ("hya", "ひゃ"), ("hyu", "ひゅ"), ("hyo", "ひょ"),
    ("mya", "みゃ"), ("myu", "みゅ"), ("myo", "みょ"),
    ("rya", "りゃ"), ("ryu", "りゅ"), ("ryo", "りょ"),
    ("gya", "ぎゃ"), ("gyu", "ぎゅ"), ("gyo", "ぎょ"),
    ("bya", "びゃ"), ("byu", "びゅ"), ("byo", "びょ"),
    ("pya", "ぴゃ"), ("pyu", "ぴゅ"), ("pyo", "ぴょ"),
    ("ja", "じゃ"), ("ju", "じゅ"), ("jo", "じょ"), ("ji", "じ"),
    ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
    ("sa", "さ"), ("si", "し"), ("su", "す"), ("se", "せ"), ("so", "そ"),
    ("ta", "た"), ("ti", "ち"), ("tu", "つ"), ("te", "て"), ("to", "と"),
    ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
    ("ha", "は"), ("hi", "ひ"), ("hu", "ふ"), ("fu", "ふ"), ("he", "へ"), ("ho", "ほ"),
    ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
    ("ya", "や"), ("yu", "ゆ"), ("yo", "よ"),
    ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
    ("la", "ら"), ("li", "り"), ("lu", "る"), ("le", "れ"), ("lo", "ろ"),
    ("wa", "わ"), ("wo", "を"),
    ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"),
    ("za", "ざ"), ("zi", "じ"), ("zu", "ず"), ("ze", "ぜ"), ("zo", "ぞ"),
    ("da", "だ"), ("di", "ぢ"), ("du", "づ"), ("de", "で"), ("do", "ど"),
    ("ba", "ば"), ("bi", "び"), ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"),
    ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"), ("pe", "ぺ"), ("po", "ぽ"),
    ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
    ("-", "ー"),
];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c)
}

/// Shift katakana into the hiragana block; everything else passes through
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_katakana(c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

pub fn kana_to_romaji(text: &str) -> String {
    let hiragana = katakana_to_hiragana(text);
    let mut rest = hiragana.as_str();
    let mut result = String::new();

    while let Some(c) = rest.chars().next() {
        if c == 'っ' {
            rest = &rest[c.len_utf8()..];
            // Double the next consonant
            if let Some((_, romaji)) = KANA_ROMAJI.iter().find(|(k, _)| rest.starts_with(k)) {
                if let Some(first) = romaji.chars().next().filter(|f| !is_vowel(*f)) {
                    result.push(first);
                }
            }
            continue;
        }

        match KANA_ROMAJI.iter().find(|(k, _)| rest.starts_with(k)) {
            Some((kana, romaji)) => {
                result.push_str(romaji);
                rest = &rest[kana.len()..];
            }
            None => {
                result.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    result
}

/// IME-style conversion of typed romaji; kana already in the text is kept
pub fn romaji_to_hiragana(text: &str) -> String {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == 'n' {
            match next {
                Some('\'') => {
                    result.push('ん');
                    i += 2;
                    continue;
                }
                // "nn" is a full ん unless the second n starts a syllable
                Some('n') => {
                    let after = chars.get(i + 2).copied();
                    result.push('ん');
                    i += if after.is_some_and(|a| is_vowel(a) || a == 'y') { 1 } else { 2 };
                    continue;
                }
                Some(n) if is_vowel(n) || n == 'y' => {}
                _ => {
                    result.push('ん');
                    i += 1;
                    continue;
                }
            }
        }

        // Doubled consonant (or "tch") is a small tsu
        if c.is_ascii_alphabetic() && !is_vowel(c) {
            let geminate = next == Some(c) || (c == 't' && next == Some('c'));
            if geminate {
                result.push('っ');
                i += 1;
                continue;
            }
        }

        let matched = (1..=3).rev().find_map(|len| {
            if i + len > chars.len() {
                return None;
            }
            let chunk: String = chars[i..i + len].iter().collect();
            ROMAJI_KANA
                .iter()
                .find(|(romaji, _)| *romaji == chunk)
                .map(|(_, kana)| (*kana, len))
        });

        match matched {
            Some((kana, len)) => {
                result.push_str(kana);
                i += len;
            }
            None => {
                result.push(c);
                i += 1;
            }
        }
    }

    result
}

/// Fold learner input (kana in either script, or romaji) into hiragana
pub fn to_hiragana(text: &str) -> String {
    let processed = DefaultPreprocessor.process(text);
    katakana_to_hiragana(&romaji_to_hiragana(&processed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katakana_fold() {
        assert_eq!(katakana_to_hiragana("タベテ"), "たべて");
        assert_eq!(katakana_to_hiragana("コーヒー"), "こーひー");
    }

    #[test]
    fn test_kana_to_romaji() {
        assert_eq!(kana_to_romaji("たべる"), "taberu");
        assert_eq!(kana_to_romaji("いって"), "itte");
        assert_eq!(kana_to_romaji("べんきょう"), "benkyou");
        assert_eq!(kana_to_romaji("まっちゃ"), "maccha");
    }

    #[test]
    fn test_romaji_to_hiragana() {
        assert_eq!(romaji_to_hiragana("tabete"), "たべて");
        assert_eq!(romaji_to_hiragana("itte"), "いって");
        assert_eq!(romaji_to_hiragana("yonde"), "よんで");
        assert_eq!(romaji_to_hiragana("konnichiha"), "こんにちは");
        assert_eq!(romaji_to_hiragana("hon"), "ほん");
        assert_eq!(romaji_to_hiragana("kan'i"), "かんい");
        assert_eq!(romaji_to_hiragana("benkyoushimasu"), "べんきょうします");
        assert_eq!(romaji_to_hiragana("matchi"), "まっち");
    }

    #[test]
    fn test_to_hiragana_mixed_input() {
        assert_eq!(to_hiragana("  カイテ "), "かいて");
        assert_eq!(to_hiragana("KAITE"), "かいて");
        assert_eq!(to_hiragana("かいて"), "かいて");
        assert_eq!(to_hiragana("ｋａｉｔｅ"), "かいて");
    }
}
