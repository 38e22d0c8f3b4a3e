use crate::constants::{
    BASE_SYLLABLE,
    BASE_종성,
    BASE_중성,
    BASE_초성,
    LAST_SYLLABLE,
    NUM_종성,
    NUM_중성,
};
use crate::jamo::Jamo;
use std::fmt;

/// A syllable block. Each slot is either a `Jamo` or `Jamo::EMPTY`.
///
/// - 초성 only: a bare consonant (or a non-한글 character, which is always stored in `choseong`)
/// - 중성 without 초성: a bare vowel
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Eumjeol {
    pub choseong: Jamo,
    pub jungseong: Jamo,
    pub jongseong: Jamo,
}

impl Eumjeol {
    /// Each slot is stored in its canonical form (`Jamo::to_choseong`), so a block
    /// built from compatibility letters is the same as the one `disassemble` returns.
    pub fn new(choseong: Jamo, jungseong: Jamo, jongseong: Jamo) -> Self {
        Eumjeol {
            choseong: choseong.to_choseong(),
            jungseong: jungseong.to_choseong(),
            jongseong: jongseong.to_choseong(),
        }
    }

    /// `None` if `c` is not in the precomposed syllable block (가..힣).
    pub fn from_syllable(c: char) -> Option<Eumjeol> {
        let c = c as u32;

        if c < BASE_SYLLABLE || c > LAST_SYLLABLE {
            return None;
        }

        let offset = c - BASE_SYLLABLE;
        let 초성 = offset / (NUM_중성 * NUM_종성);
        let 중성 = offset % (NUM_중성 * NUM_종성) / NUM_종성;
        let 종성 = offset % NUM_종성;

        Some(Eumjeol {
            choseong: Jamo::from_u32(BASE_초성 + 초성),
            jungseong: Jamo::from_u32(BASE_중성 + 중성),
            jongseong: if 종성 == 0 {
                Jamo::EMPTY
            } else {
                Jamo::from_u32(BASE_종성 + 종성).to_choseong()
            },
        })
    }

    pub fn is_empty(&self) -> bool {
        self.choseong.is_empty() && self.jungseong.is_empty() && self.jongseong.is_empty()
    }

    pub fn equals(&self, other: &Eumjeol) -> bool {
        self.choseong.equals(&other.choseong)
        && self.jungseong.equals(&other.jungseong)
        && self.jongseong.equals(&other.jongseong)
    }

    pub fn is_hangul(&self) -> bool {
        self.choseong.is_hangul() || self.jungseong.is_hangul() || self.jongseong.is_hangul()
    }

    pub(crate) fn has_only_choseong(&self) -> bool {
        !self.choseong.is_empty() && self.jungseong.is_empty() && self.jongseong.is_empty()
    }

    pub(crate) fn has_only_jungseong(&self) -> bool {
        self.choseong.is_empty() && !self.jungseong.is_empty() && self.jongseong.is_empty()
    }

    /// 초성 and 중성, but no 종성
    pub(crate) fn is_open(&self) -> bool {
        !self.choseong.is_empty() && !self.jungseong.is_empty() && self.jongseong.is_empty()
    }

    /// all the 3 slots are filled
    pub(crate) fn is_closed(&self) -> bool {
        !self.choseong.is_empty() && !self.jungseong.is_empty() && !self.jongseong.is_empty()
    }

    /// The precomposed syllable, if every slot is in a valid range.
    pub fn to_syllable(&self) -> Option<char> {
        let 초성 = self.choseong.choseong_index()?;
        let 중성 = self.jungseong.jungseong_index()?;
        let 종성 = if self.jongseong.is_empty() { 0 } else { self.jongseong.jongseong_index()? };

        char::from_u32(syllable(초성, 중성, 종성))
    }

    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        if self.has_only_choseong() {
            return self.choseong.to_letter().to_string();
        }

        // a bare vowel is displayed on its own, not as a syllable with an implicit 'ㄱ'
        if self.choseong.is_empty() {
            return self.render_letters();
        }

        match (self.choseong.choseong_index(), self.jungseong.jungseong_index()) {
            (Some(초성), Some(중성)) => {
                let 종성 = if self.jongseong.is_empty() { Some(0) } else { self.jongseong.jongseong_index() };

                match 종성 {
                    Some(종성) => render_syllable(syllable(초성, 중성, 종성)),

                    // 'ㄸ', 'ㅃ' and 'ㅉ' cannot be a 종성
                    None => format!(
                        "{}{}",
                        render_syllable(syllable(초성, 중성, 0)),
                        self.jongseong.to_letter(),
                    ),
                }
            },
            _ => self.render_letters(),
        }
    }

    fn render_letters(&self) -> String {
        [self.choseong, self.jungseong, self.jongseong].iter().map(
            |j| j.to_letter().to_string()
        ).collect::<Vec<_>>().concat()
    }
}

impl fmt::Display for Eumjeol {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.render())
    }
}

fn syllable(초성: u32, 중성: u32, 종성: u32) -> u32 {
    BASE_SYLLABLE + 초성 * NUM_중성 * NUM_종성 + 중성 * NUM_종성 + 종성
}

// indices are always in range, so it never fails
fn render_syllable(c: u32) -> String {
    char::from_u32(c).map(|c| c.to_string()).unwrap_or_default()
}
