use crate::constants::{
    BASE_LETTER,
    BASE_종성,
    BASE_중성,
    BASE_초성,
    COMPOUND_종성,
    COMPOUND_종성_REV,
    COMPOUND_중성,
    COMPOUND_중성_REV,
    LAST_LETTER,
    NUM_종성,
    NUM_중성,
    NUM_초성,
    TO_LETTER,
    TO_종성,
    TO_초성,
};
use std::fmt;

/// A single code point, which is (or is not) one of the 4 forms of a 한글 letter:
/// a compatibility letter, a 초성, a 중성 or a 종성.
///
/// `Jamo(0)` means "absent". Conversions never fail: anything that's not in the
/// tables is converted to itself, so non-한글 characters flow through untouched.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Jamo(u32);

impl Jamo {
    pub const EMPTY: Jamo = Jamo(0);

    pub(crate) fn from_u32(c: u32) -> Self {
        Jamo(c)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// `None` if it's empty
    pub fn to_char(&self) -> Option<char> {
        if self.is_empty() {
            None
        }

        else {
            char::from_u32(self.0)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Unlike `==`, it treats the same letter in different sub-ranges as equal.
    /// For example, 'ㄱ' (U+3131) equals 'ᄀ' (U+1100) and 'ᆨ' (U+11A8).
    pub fn equals(&self, other: &Jamo) -> bool {
        self == other
        || self.to_letter() == other.to_letter()
        || self.to_choseong() == other.to_choseong()
        || self.to_jongseong() == other.to_jongseong()
    }

    pub fn is_hangul(&self) -> bool {
        self.is_choseong() || self.is_jungseong() || self.is_jongseong()
    }

    pub fn is_choseong(&self) -> bool {
        BASE_초성 <= self.0 && self.0 < BASE_초성 + NUM_초성
    }

    pub fn is_jungseong(&self) -> bool {
        BASE_중성 <= self.0 && self.0 < BASE_중성 + NUM_중성
    }

    pub fn is_jongseong(&self) -> bool {
        BASE_종성 < self.0 && self.0 < BASE_종성 + NUM_종성
    }

    pub fn is_letter(&self) -> bool {
        BASE_LETTER <= self.0 && self.0 <= LAST_LETTER
    }

    /// 초성, 중성, 종성 -> compatibility letter
    pub fn to_letter(&self) -> Jamo {
        Jamo(TO_LETTER.get(&self.0).copied().unwrap_or(self.0))
    }

    /// This is the canonical form that `disassemble` stores.
    ///
    /// compatibility consonant -> 초성 (or 종성, if the letter is a cluster like 'ㄳ')\
    /// compatibility vowel -> 중성\
    /// 종성 -> 초성 (if there is one)
    pub fn to_choseong(&self) -> Jamo {
        Jamo(TO_초성.get(&self.0).copied().unwrap_or(self.0))
    }

    /// 초성 -> 종성
    ///
    /// 'ㄸ', 'ㅃ' and 'ㅉ' don't have a 종성 form, so they're converted to themselves.
    pub fn to_jongseong(&self) -> Jamo {
        Jamo(TO_종성.get(&self.0).copied().unwrap_or(self.0))
    }

    /// The 종성 form of a consonant in any sub-range, if it has one.
    pub(crate) fn as_jongseong(&self) -> Option<Jamo> {
        let j = self.to_choseong().to_jongseong();

        if j.is_jongseong() {
            Some(j)
        }

        else {
            None
        }
    }

    /// Index in the 초성 table, if it's a 초성 in any sub-range.
    pub(crate) fn choseong_index(&self) -> Option<u32> {
        let j = self.to_choseong();

        if j.is_choseong() {
            Some(j.0 - BASE_초성)
        }

        else {
            None
        }
    }

    /// Index in the 중성 table, if it's a vowel in any sub-range.
    pub(crate) fn jungseong_index(&self) -> Option<u32> {
        let j = self.to_choseong();

        if j.is_jungseong() {
            Some(j.0 - BASE_중성)
        }

        else {
            None
        }
    }

    /// 1..=27, if it's a consonant that can be a 종성
    pub(crate) fn jongseong_index(&self) -> Option<u32> {
        self.as_jongseong().map(|j| j.0 - BASE_종성)
    }

    /// ('ㅗ', 'ㅏ') -> 'ㅘ' (in 중성 form)
    pub fn compound_jungseong(a: Jamo, b: Jamo) -> Option<Jamo> {
        COMPOUND_중성.get(&(a.to_letter().0, b.to_letter().0)).map(|c| Jamo(*c))
    }

    /// ('ㄹ', 'ㄱ') -> 'ㄺ' (in 종성 form)
    pub fn compound_jongseong(a: Jamo, b: Jamo) -> Option<Jamo> {
        COMPOUND_종성.get(&(a.to_letter().0, b.to_letter().0)).map(|c| Jamo(*c))
    }

    /// 'ㅘ' -> ('ㅗ', 'ㅏ'), in compatibility letters
    pub fn split_jungseong(&self) -> Option<(Jamo, Jamo)> {
        COMPOUND_중성_REV.get(&self.to_choseong().0).map(|(a, b)| (Jamo(*a), Jamo(*b)))
    }

    /// 'ㄺ' -> ('ㄹ', 'ㄱ'), in compatibility letters
    ///
    /// It only splits clusters that cannot be a 초성. 'ㄲ' and 'ㅆ' are
    /// compound 종성s, but they're also 초성s, so they're not split.
    pub fn split_cluster(&self) -> Option<(Jamo, Jamo)> {
        let j = self.to_choseong();

        if j.is_choseong() {
            return None;
        }

        COMPOUND_종성_REV.get(&j.to_jongseong().0).map(|(a, b)| (Jamo(*a), Jamo(*b)))
    }

    /// 'ㅘ' -> ['ㅗ', 'ㅏ'], 'ㄲ' -> ['ㄱ', 'ㄱ'], 'ㄱ' -> ['ㄱ'], in compatibility letters
    ///
    /// Unlike `split_cluster`, it also splits 'ㄲ' and 'ㅆ'. An empty `Jamo` has no letters.
    pub fn decompose_compound(&self) -> Vec<Jamo> {
        if self.is_empty() {
            return vec![];
        }

        let j = self.to_choseong();

        if let Some((a, b)) = COMPOUND_중성_REV.get(&j.0) {
            return vec![Jamo(*a), Jamo(*b)];
        }

        if let Some((a, b)) = COMPOUND_종성_REV.get(&j.to_jongseong().0) {
            return vec![Jamo(*a), Jamo(*b)];
        }

        vec![self.to_letter()]
    }

    /// ㄲ ㄳ ㄵ ㄶ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅄ ㅆ
    pub fn is_compound_jongseong(&self) -> bool {
        match self.as_jongseong() {
            Some(j) => COMPOUND_종성_REV.contains_key(&j.0),
            None => false,
        }
    }
}

impl From<char> for Jamo {
    fn from(c: char) -> Jamo {
        Jamo(c as u32)
    }
}

impl fmt::Display for Jamo {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(fmt, "{c}"),
            None => Ok(()),
        }
    }
}
