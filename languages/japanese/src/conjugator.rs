use katachi_types::{ConjugationType as C, WordGroup};

use crate::lexicon::Conjugations;

/// Kana row of a godan ending: (a, i, e, o) columns
fn godan_row(ending: char) -> Option<[char; 4]> {
    let row = match ending {
        'う' => ['わ', 'い', 'え', 'お'],
        'く' => ['か', 'き', 'け', 'こ'],
        'ぐ' => ['が', 'ぎ', 'げ', 'ご'],
        'す' => ['さ', 'し', 'せ', 'そ'],
        'つ' => ['た', 'ち', 'て', 'と'],
        'ぬ' => ['な', 'に', 'ね', 'の'],
        'ぶ' => ['ば', 'び', 'べ', 'ぼ'],
        'む' => ['ま', 'み', 'め', 'も'],
        'る' => ['ら', 'り', 'れ', 'ろ'],
        _ => return None,
    };
    Some(row)
}

/// Euphonic te/ta suffixes for a godan ending
fn godan_te_ta(ending: char) -> Option<(&'static str, &'static str)> {
    match ending {
        'う' | 'つ' | 'る' => Some(("って", "った")),
        'く' => Some(("いて", "いた")),
        'ぐ' => Some(("いで", "いだ")),
        'す' => Some(("して", "した")),
        'ぬ' | 'ぶ' | 'む' => Some(("んで", "んだ")),
        _ => None,
    }
}

/// Split off the final character of a kana string
pub fn split_last(kana: &str) -> Option<(&str, char)> {
    let last = kana.chars().next_back()?;
    Some((&kana[..kana.len() - last.len_utf8()], last))
}

fn table(forms: [(C, String); 16]) -> Conjugations {
    forms.into_iter().collect()
}

fn adjective_table(forms: [(C, String); 10]) -> Conjugations {
    forms.into_iter().collect()
}

pub fn conjugate_godan(kana: &str) -> Option<Conjugations> {
    let (stem, ending) = split_last(kana)?;
    let [a, i, e, o] = godan_row(ending)?;
    let (mut te, mut ta) = godan_te_ta(ending)?;

    // 行く keeps the small-tsu sound change despite ending in く
    if kana == "いく" || kana == "ゆく" {
        (te, ta) = ("って", "った");
    }

    let past_plain = format!("{stem}{ta}");
    let mut forms = table([
        (C::Polite, format!("{stem}{i}ます")),
        (C::NegativePlain, format!("{stem}{a}ない")),
        (C::NegativePolite, format!("{stem}{i}ません")),
        (C::PastPlain, past_plain.clone()),
        (C::PastPolite, format!("{stem}{i}ました")),
        (C::PastNegativePlain, format!("{stem}{a}なかった")),
        (C::PastNegativePolite, format!("{stem}{i}ませんでした")),
        (C::TeForm, format!("{stem}{te}")),
        (C::Potential, format!("{stem}{e}る")),
        (C::Passive, format!("{stem}{a}れる")),
        (C::Causative, format!("{stem}{a}せる")),
        (C::CausativePassive, format!("{stem}{a}せられる")),
        (C::Imperative, format!("{stem}{e}")),
        (C::Volitional, format!("{stem}{o}う")),
        (C::ConditionalBa, format!("{stem}{e}ば")),
        (C::ConditionalTara, format!("{past_plain}ら")),
    ]);

    // ある negates suppletively
    if kana == "ある" {
        forms.insert(C::NegativePlain, "ない".to_string());
        forms.insert(C::PastNegativePlain, "なかった".to_string());
    }

    Some(forms)
}

pub fn conjugate_ichidan(kana: &str) -> Option<Conjugations> {
    let stem = kana.strip_suffix('る')?;
    Some(table([
        (C::Polite, format!("{stem}ます")),
        (C::NegativePlain, format!("{stem}ない")),
        (C::NegativePolite, format!("{stem}ません")),
        (C::PastPlain, format!("{stem}た")),
        (C::PastPolite, format!("{stem}ました")),
        (C::PastNegativePlain, format!("{stem}なかった")),
        (C::PastNegativePolite, format!("{stem}ませんでした")),
        (C::TeForm, format!("{stem}て")),
        (C::Potential, format!("{stem}られる")),
        (C::Passive, format!("{stem}られる")),
        (C::Causative, format!("{stem}させる")),
        (C::CausativePassive, format!("{stem}させられる")),
        (C::Imperative, format!("{stem}ろ")),
        (C::Volitional, format!("{stem}よう")),
        (C::ConditionalBa, format!("{stem}れば")),
        (C::ConditionalTara, format!("{stem}たら")),
    ]))
}

/// する and noun + する compounds
pub fn conjugate_suru(kana: &str) -> Option<Conjugations> {
    let prefix = kana.strip_suffix("する")?;
    Some(table([
        (C::Polite, format!("{prefix}します")),
        (C::NegativePlain, format!("{prefix}しない")),
        (C::NegativePolite, format!("{prefix}しません")),
        (C::PastPlain, format!("{prefix}した")),
        (C::PastPolite, format!("{prefix}しました")),
        (C::PastNegativePlain, format!("{prefix}しなかった")),
        (C::PastNegativePolite, format!("{prefix}しませんでした")),
        (C::TeForm, format!("{prefix}して")),
        (C::Potential, format!("{prefix}できる")),
        (C::Passive, format!("{prefix}される")),
        (C::Causative, format!("{prefix}させる")),
        (C::CausativePassive, format!("{prefix}させられる")),
        (C::Imperative, format!("{prefix}しろ")),
        (C::Volitional, format!("{prefix}しよう")),
        (C::ConditionalBa, format!("{prefix}すれば")),
        (C::ConditionalTara, format!("{prefix}したら")),
    ]))
}

/// くる and compounds ending in くる
pub fn conjugate_kuru(kana: &str) -> Option<Conjugations> {
    let prefix = kana.strip_suffix("くる")?;
    Some(table([
        (C::Polite, format!("{prefix}きます")),
        (C::NegativePlain, format!("{prefix}こない")),
        (C::NegativePolite, format!("{prefix}きません")),
        (C::PastPlain, format!("{prefix}きた")),
        (C::PastPolite, format!("{prefix}きました")),
        (C::PastNegativePlain, format!("{prefix}こなかった")),
        (C::PastNegativePolite, format!("{prefix}きませんでした")),
        (C::TeForm, format!("{prefix}きて")),
        (C::Potential, format!("{prefix}こられる")),
        (C::Passive, format!("{prefix}こられる")),
        (C::Causative, format!("{prefix}こさせる")),
        (C::CausativePassive, format!("{prefix}こさせられる")),
        (C::Imperative, format!("{prefix}こい")),
        (C::Volitional, format!("{prefix}こよう")),
        (C::ConditionalBa, format!("{prefix}くれば")),
        (C::ConditionalTara, format!("{prefix}きたら")),
    ]))
}

pub fn conjugate_i_adjective(kana: &str) -> Option<Conjugations> {
    if !kana.ends_with('い') {
        return None;
    }

    // いい/よい and compounds built on them inflect from よ
    let stem = match kana {
        "いい" | "よい" => "よ".to_string(),
        "かっこいい" => "かっこよ".to_string(),
        _ => kana.strip_suffix('い')?.to_string(),
    };
    Some(adjective_table([
        (C::Polite, format!("{kana}です")),
        (C::NegativePlain, format!("{stem}くない")),
        (C::NegativePolite, format!("{stem}くないです")),
        (C::PastPlain, format!("{stem}かった")),
        (C::PastPolite, format!("{stem}かったです")),
        (C::PastNegativePlain, format!("{stem}くなかった")),
        (C::PastNegativePolite, format!("{stem}くなかったです")),
        (C::TeForm, format!("{stem}くて")),
        (C::ConditionalBa, format!("{stem}ければ")),
        (C::ConditionalTara, format!("{stem}かったら")),
    ]))
}

/// `kana` is the stem without the attributive な
pub fn conjugate_na_adjective(kana: &str) -> Option<Conjugations> {
    if kana.is_empty() {
        return None;
    }
    Some(adjective_table([
        (C::Polite, format!("{kana}です")),
        (C::NegativePlain, format!("{kana}じゃない")),
        (C::NegativePolite, format!("{kana}じゃありません")),
        (C::PastPlain, format!("{kana}だった")),
        (C::PastPolite, format!("{kana}でした")),
        (C::PastNegativePlain, format!("{kana}じゃなかった")),
        (C::PastNegativePolite, format!("{kana}じゃありませんでした")),
        (C::TeForm, format!("{kana}で")),
        (C::ConditionalBa, format!("{kana}であれば")),
        (C::ConditionalTara, format!("{kana}だったら")),
    ]))
}

/// Correct conjugation table for a dictionary-form kana of the given group
pub fn conjugate(kana: &str, group: WordGroup) -> Option<Conjugations> {
    match group {
        WordGroup::Godan => conjugate_godan(kana),
        WordGroup::Ichidan => conjugate_ichidan(kana),
        WordGroup::Suru => conjugate_suru(kana),
        WordGroup::Kuru => conjugate_kuru(kana),
        WordGroup::IAdjective => conjugate_i_adjective(kana),
        WordGroup::NaAdjective => conjugate_na_adjective(kana),
    }
}
