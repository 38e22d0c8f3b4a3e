use crate::daneo::Daneo;
use crate::eumjeol::Eumjeol;
use crate::jamo::Jamo;

/// It always returns exactly one `Eumjeol` per `char` of `s`.
///
/// "안녕" -> [{ㅇ, ㅏ, ㄴ}, {ㄴ, ㅕ, ㅇ}]
pub fn disassemble(s: &str) -> Daneo {
    s.chars().map(disassemble_char).collect()
}

pub fn disassemble_char(c: char) -> Eumjeol {
    match Eumjeol::from_syllable(c) {
        Some(e) => e,
        None => {
            let j = Jamo::from(c).to_choseong();

            if j.is_jungseong() {
                Eumjeol { jungseong: j, ..Eumjeol::default() }
            }

            // consonants, and everything that's not 한글
            else {
                Eumjeol { choseong: j, ..Eumjeol::default() }
            }
        },
    }
}
