use lazy_static::lazy_static;
use std::collections::HashMap;

pub const BASE_SYLLABLE: u32 = 0xAC00;  // '가'
pub const LAST_SYLLABLE: u32 = 0xD7A3;  // '힣'

pub const BASE_초성: u32 = 0x1100;
pub const BASE_중성: u32 = 0x1161;

// index 0 of 종성 means "no 종성", so the first 종성 is at `BASE_종성 + 1`
pub const BASE_종성: u32 = 0x11A7;

pub const NUM_초성: u32 = 19;
pub const NUM_중성: u32 = 21;
pub const NUM_종성: u32 = 28;

pub const BASE_LETTER: u32 = 0x3131;  // 'ㄱ'
pub const LAST_LETTER: u32 = 0x3163;  // 'ㅣ'

const X: u32 = 0;

/// (compatibility letter, 초성, 중성, 종성)
///
/// `X` means that the letter doesn't have that form. Every conversion
/// between the sub-ranges is derived from this table.
pub const LETTERS: [(char, u32, u32, u32); 51] = [
    ('ㄱ', 0x1100, X, 0x11A8),
    ('ㄲ', 0x1101, X, 0x11A9),
    ('ㄳ', X, X, 0x11AA),
    ('ㄴ', 0x1102, X, 0x11AB),
    ('ㄵ', X, X, 0x11AC),
    ('ㄶ', X, X, 0x11AD),
    ('ㄷ', 0x1103, X, 0x11AE),
    ('ㄸ', 0x1104, X, X),
    ('ㄹ', 0x1105, X, 0x11AF),
    ('ㄺ', X, X, 0x11B0),
    ('ㄻ', X, X, 0x11B1),
    ('ㄼ', X, X, 0x11B2),
    ('ㄽ', X, X, 0x11B3),
    ('ㄾ', X, X, 0x11B4),
    ('ㄿ', X, X, 0x11B5),
    ('ㅀ', X, X, 0x11B6),
    ('ㅁ', 0x1106, X, 0x11B7),
    ('ㅂ', 0x1107, X, 0x11B8),
    ('ㅃ', 0x1108, X, X),
    ('ㅄ', X, X, 0x11B9),
    ('ㅅ', 0x1109, X, 0x11BA),
    ('ㅆ', 0x110A, X, 0x11BB),
    ('ㅇ', 0x110B, X, 0x11BC),
    ('ㅈ', 0x110C, X, 0x11BD),
    ('ㅉ', 0x110D, X, X),
    ('ㅊ', 0x110E, X, 0x11BE),
    ('ㅋ', 0x110F, X, 0x11BF),
    ('ㅌ', 0x1110, X, 0x11C0),
    ('ㅍ', 0x1111, X, 0x11C1),
    ('ㅎ', 0x1112, X, 0x11C2),
    ('ㅏ', X, 0x1161, X),
    ('ㅐ', X, 0x1162, X),
    ('ㅑ', X, 0x1163, X),
    ('ㅒ', X, 0x1164, X),
    ('ㅓ', X, 0x1165, X),
    ('ㅔ', X, 0x1166, X),
    ('ㅕ', X, 0x1167, X),
    ('ㅖ', X, 0x1168, X),
    ('ㅗ', X, 0x1169, X),
    ('ㅘ', X, 0x116A, X),
    ('ㅙ', X, 0x116B, X),
    ('ㅚ', X, 0x116C, X),
    ('ㅛ', X, 0x116D, X),
    ('ㅜ', X, 0x116E, X),
    ('ㅝ', X, 0x116F, X),
    ('ㅞ', X, 0x1170, X),
    ('ㅟ', X, 0x1171, X),
    ('ㅠ', X, 0x1172, X),
    ('ㅡ', X, 0x1173, X),
    ('ㅢ', X, 0x1174, X),
    ('ㅣ', X, 0x1175, X),
];

/// two vowel letters -> a 중성
///
/// ㅐ, ㅒ, ㅔ and ㅖ are single letters in the standard keyboard layout,
/// but they're also accepted as a sequence of two letters.
pub const COMPOUND_중성S: [(char, char, u32); 11] = [
    ('ㅗ', 'ㅏ', 0x116A),  // ㅘ
    ('ㅗ', 'ㅐ', 0x116B),  // ㅙ
    ('ㅗ', 'ㅣ', 0x116C),  // ㅚ
    ('ㅜ', 'ㅓ', 0x116F),  // ㅝ
    ('ㅜ', 'ㅔ', 0x1170),  // ㅞ
    ('ㅜ', 'ㅣ', 0x1171),  // ㅟ
    ('ㅡ', 'ㅣ', 0x1174),  // ㅢ
    ('ㅕ', 'ㅣ', 0x1168),  // ㅖ
    ('ㅏ', 'ㅣ', 0x1162),  // ㅐ
    ('ㅑ', 'ㅣ', 0x1164),  // ㅒ
    ('ㅓ', 'ㅣ', 0x1166),  // ㅔ
];

/// two consonant letters -> a 종성
pub const COMPOUND_종성S: [(char, char, u32); 13] = [
    ('ㄱ', 'ㄱ', 0x11A9),  // ㄲ
    ('ㄱ', 'ㅅ', 0x11AA),  // ㄳ
    ('ㄴ', 'ㅈ', 0x11AC),  // ㄵ
    ('ㄴ', 'ㅎ', 0x11AD),  // ㄶ
    ('ㄹ', 'ㄱ', 0x11B0),  // ㄺ
    ('ㄹ', 'ㅁ', 0x11B1),  // ㄻ
    ('ㄹ', 'ㅂ', 0x11B2),  // ㄼ
    ('ㄹ', 'ㅅ', 0x11B3),  // ㄽ
    ('ㄹ', 'ㅌ', 0x11B4),  // ㄾ
    ('ㄹ', 'ㅍ', 0x11B5),  // ㄿ
    ('ㄹ', 'ㅎ', 0x11B6),  // ㅀ
    ('ㅂ', 'ㅅ', 0x11B9),  // ㅄ
    ('ㅅ', 'ㅅ', 0x11BB),  // ㅆ
];

lazy_static! {
    // 초성, 중성, 종성 -> compatibility letter
    pub static ref TO_LETTER: HashMap<u32, u32> = {
        let mut r = HashMap::with_capacity(LETTERS.len() * 2);

        for (letter, 초성, 중성, 종성) in LETTERS.iter() {
            for c in [*초성, *중성, *종성] {
                if c != X {
                    r.insert(c, *letter as u32);
                }
            }
        }

        r
    };

    // compatibility letter -> 초성 (or 중성, or 종성 if it's a cluster that cannot be a 초성)
    // 종성 -> 초성
    pub static ref TO_초성: HashMap<u32, u32> = {
        let mut r = HashMap::with_capacity(LETTERS.len() * 2);

        for (letter, 초성, 중성, 종성) in LETTERS.iter() {
            let canonical = match (*초성, *중성, *종성) {
                (X, X, c) => c,
                (X, c, _) => c,
                (c, _, _) => c,
            };

            r.insert(*letter as u32, canonical);

            if *초성 != X && *종성 != X {
                r.insert(*종성, *초성);
            }
        }

        r
    };

    // 초성 -> 종성
    pub static ref TO_종성: HashMap<u32, u32> = LETTERS.iter().filter(
        |(_, 초성, _, 종성)| *초성 != X && *종성 != X
    ).map(
        |(_, 초성, _, 종성)| (*초성, *종성)
    ).collect();

    pub static ref COMPOUND_중성: HashMap<(u32, u32), u32> = COMPOUND_중성S.iter().map(
        |(a, b, c)| ((*a as u32, *b as u32), *c)
    ).collect();

    pub static ref COMPOUND_중성_REV: HashMap<u32, (u32, u32)> = COMPOUND_중성S.iter().map(
        |(a, b, c)| (*c, (*a as u32, *b as u32))
    ).collect();

    pub static ref COMPOUND_종성: HashMap<(u32, u32), u32> = COMPOUND_종성S.iter().map(
        |(a, b, c)| ((*a as u32, *b as u32), *c)
    ).collect();

    pub static ref COMPOUND_종성_REV: HashMap<u32, (u32, u32)> = COMPOUND_종성S.iter().map(
        |(a, b, c)| (*c, (*a as u32, *b as u32))
    ).collect();
}
