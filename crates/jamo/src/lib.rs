/*
A 한글 letter has 4 forms in Unicode:

- compatibility letters (U+3131..U+3163): what you type and see, 'ㄱ', 'ㅏ'
- 초성 (U+1100..U+1112): leading consonants
- 중성 (U+1161..U+1175): vowels
- 종성 (U+11A8..U+11C2): trailing consonants

`disassemble` turns each character into an `Eumjeol` (a syllable block with 3 slots), and
`assemble` merges a sequence of blocks back into syllables. The merge rules are, in order:

1. 'ㄱ' + 'ㅏ' -> '가': a consonant absorbs the following vowel.
2. '각' + 'ㅏ' -> '가' + '가': a 종성 followed by a vowel becomes the next syllable's 초성.
3. '가' + 'ㄱ' -> '각': a consonant after an open syllable becomes its 종성.
4. '고' + 'ㅏ' -> '과': two vowels make a compound vowel, if they can.
5. '갈' + 'ㄱ' -> '갉': two consonants make a cluster, if they can.

If nothing matches, the next block starts a new syllable. Non-한글 characters are
never merged.
*/

mod assemble;
mod constants;
mod daneo;
mod disassemble;
mod eumjeol;
mod grammar;
mod jamo;

#[cfg(test)]
mod tests;

pub use crate::assemble::assemble;
pub use crate::constants::{
    BASE_SYLLABLE,
    LAST_SYLLABLE,
    NUM_종성,
    NUM_중성,
    NUM_초성,
};
pub use crate::daneo::Daneo;
pub use crate::disassemble::{disassemble, disassemble_char};
pub use crate::eumjeol::Eumjeol;
pub use crate::grammar::{
    can_be_choseong,
    can_be_jongseong,
    can_be_jungseong,
    combine_character,
    combine_vowels,
    get_choseong,
    has_batchim,
};
pub use crate::jamo::Jamo;
