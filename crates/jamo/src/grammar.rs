use crate::assemble::assemble;
use crate::disassemble::disassemble;
use crate::eumjeol::Eumjeol;
use crate::jamo::Jamo;

/// Whether the last character of `word` has a 종성 (받침).
///
/// - `None`: any 종성
/// - `Some(true)`: only compound 종성s (ㄲ ㄳ ㄵ ㄶ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅄ ㅆ)
/// - `Some(false)`: only simple 종성s
///
/// It's always `false` if the last character is not a syllable.
pub fn has_batchim(word: &str, only_compound: Option<bool>) -> bool {
    let Some(last) = word.chars().last() else { return false; };
    let Some(Eumjeol { jongseong, .. }) = Eumjeol::from_syllable(last) else { return false; };

    if jongseong.is_empty() {
        return false;
    }

    match only_compound {
        None => true,
        Some(true) => jongseong.is_compound_jongseong(),
        Some(false) => !jongseong.is_compound_jongseong(),
    }
}

pub fn can_be_choseong(s: &str) -> bool {
    let daneo = disassemble(s);

    if daneo.len() != 1 {
        return false;
    }

    let e = daneo.at(0);
    e.choseong.is_choseong() && e.jungseong.is_empty() && e.jongseong.is_empty()
}

/// A single vowel, or two vowels that make a compound vowel ("ㅡㅣ").
pub fn can_be_jungseong(s: &str) -> bool {
    let daneo = disassemble(s);

    match daneo.len() {
        1 => {
            let e = daneo.at(0);
            e.jungseong.is_jungseong() && e.choseong.is_empty() && e.jongseong.is_empty()
        },
        2 => {
            let (a, b) = (daneo.at(0), daneo.at(1));

            a.has_only_jungseong()
            && b.has_only_jungseong()
            && Jamo::compound_jungseong(a.jungseong, b.jungseong).is_some()
        },
        _ => false,
    }
}

/// A single consonant that can be a 종성, or two consonants that make a cluster ("ㄹㄱ").
pub fn can_be_jongseong(s: &str) -> bool {
    let daneo = disassemble(s);

    match daneo.len() {
        1 => {
            let e = daneo.at(0);
            e.choseong.to_jongseong().is_jongseong() && e.jungseong.is_empty() && e.jongseong.is_empty()
        },
        2 => {
            let (a, b) = (daneo.at(0), daneo.at(1));

            a.has_only_choseong()
            && b.has_only_choseong()
            && Jamo::compound_jongseong(a.choseong, b.choseong).is_some()
        },
        _ => false,
    }
}

/// ("ㅗ", "ㅏ") -> "ㅘ"
///
/// If the two letters don't make a compound vowel, it returns them concatenated.
pub fn combine_vowels(a: &str, b: &str) -> String {
    if let (Some(x), Some(y)) = (single_char(a), single_char(b)) {
        if let Some(중성) = Jamo::compound_jungseong(Jamo::from(x), Jamo::from(y)) {
            return 중성.to_letter().to_string();
        }
    }

    format!("{a}{b}")
}

/// ("ㄱ", "ㅏ", Some("ㅆ")) -> "갔"
pub fn combine_character(choseong: &str, jungseong: &str, jongseong: Option<&str>) -> String {
    assemble(&format!("{choseong}{jungseong}{}", jongseong.unwrap_or("")))
}

/// "안녕하세요" -> "ㅇㄴㅎㅅㅇ"
pub fn get_choseong(word: &str) -> String {
    disassemble(word).choseong()
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
