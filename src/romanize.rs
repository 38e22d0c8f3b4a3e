use hangeul_jamo::{Eumjeol, disassemble};
use lazy_static::lazy_static;
use std::collections::HashMap;

// Revised Romanization, letter by letter.
// Sound changes between syllables (e.g. 'ㄱ' + 'ㄴ' -> "ngn") are not applied.

const 초성_ROMAJA: [(char, &str); 19] = [
    ('ㄱ', "g"), ('ㄲ', "kk"), ('ㄴ', "n"), ('ㄷ', "d"), ('ㄸ', "tt"),
    ('ㄹ', "r"), ('ㅁ', "m"), ('ㅂ', "b"), ('ㅃ', "pp"), ('ㅅ', "s"),
    ('ㅆ', "ss"), ('ㅇ', ""), ('ㅈ', "j"), ('ㅉ', "jj"), ('ㅊ', "ch"),
    ('ㅋ', "k"), ('ㅌ', "t"), ('ㅍ', "p"), ('ㅎ', "h"),
];

const 중성_ROMAJA: [(char, &str); 21] = [
    ('ㅏ', "a"), ('ㅐ', "ae"), ('ㅑ', "ya"), ('ㅒ', "yae"), ('ㅓ', "eo"),
    ('ㅔ', "e"), ('ㅕ', "yeo"), ('ㅖ', "ye"), ('ㅗ', "o"), ('ㅘ', "wa"),
    ('ㅙ', "wae"), ('ㅚ', "oe"), ('ㅛ', "yo"), ('ㅜ', "u"), ('ㅝ', "wo"),
    ('ㅞ', "we"), ('ㅟ', "wi"), ('ㅠ', "yu"), ('ㅡ', "eu"), ('ㅢ', "ui"),
    ('ㅣ', "i"),
];

const 종성_ROMAJA: [(char, &str); 27] = [
    ('ㄱ', "k"), ('ㄲ', "k"), ('ㄳ', "ks"), ('ㄴ', "n"), ('ㄵ', "nj"),
    ('ㄶ', "nh"), ('ㄷ', "t"), ('ㄹ', "l"), ('ㄺ', "lk"), ('ㄻ', "lm"),
    ('ㄼ', "lb"), ('ㄽ', "ls"), ('ㄾ', "lt"), ('ㄿ', "lp"), ('ㅀ', "lh"),
    ('ㅁ', "m"), ('ㅂ', "p"), ('ㅄ', "ps"), ('ㅅ', "t"), ('ㅆ', "t"),
    ('ㅇ', "ng"), ('ㅈ', "t"), ('ㅊ', "t"), ('ㅋ', "k"), ('ㅌ', "t"),
    ('ㅍ', "p"), ('ㅎ', "h"),
];

lazy_static! {
    static ref 초성_MAP: HashMap<char, &'static str> = 초성_ROMAJA.into_iter().collect();
    static ref 중성_MAP: HashMap<char, &'static str> = 중성_ROMAJA.into_iter().collect();
    static ref 종성_MAP: HashMap<char, &'static str> = 종성_ROMAJA.into_iter().collect();
}

/// "안녕하세요" -> "annyeonghaseyo"
///
/// Characters that are not 한글 are copied as they are.
pub fn romanize(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for (c, eumjeol) in s.chars().zip(disassemble(s).iter()) {
        if !eumjeol.is_hangul() {
            result.push(c);
            continue;
        }

        romanize_eumjeol(eumjeol, &mut result);
    }

    result
}

fn romanize_eumjeol(eumjeol: &Eumjeol, buffer: &mut String) {
    if let Some(c) = eumjeol.choseong.to_letter().to_char() {
        // a bare cluster, like 'ㄳ', is stored in the 초성 slot
        match 초성_MAP.get(&c).or_else(|| 종성_MAP.get(&c)) {
            Some(r) => buffer.push_str(r),
            None => buffer.push(c),
        }
    }

    if let Some(c) = eumjeol.jungseong.to_letter().to_char() {
        buffer.push_str(중성_MAP.get(&c).copied().unwrap_or_default());
    }

    if let Some(c) = eumjeol.jongseong.to_letter().to_char() {
        buffer.push_str(종성_MAP.get(&c).copied().unwrap_or_default());
    }
}
