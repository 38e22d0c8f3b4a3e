use hangeul_jamo::{Jamo, disassemble};
use serde::{Deserialize, Serialize};

/// A syllable block, in compatibility letters.
/// A character that's not 한글 is in `choseong`, as it is.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EumjeolJson {
    pub character: String,
    pub choseong: Option<String>,
    pub jungseong: Option<String>,
    pub jongseong: Option<String>,
}

pub fn decomposed_json(s: &str) -> Vec<EumjeolJson> {
    s.chars().zip(disassemble(s)).map(
        |(c, eumjeol)| EumjeolJson {
            character: c.to_string(),
            choseong: letter(eumjeol.choseong),
            jungseong: letter(eumjeol.jungseong),
            jongseong: letter(eumjeol.jongseong),
        }
    ).collect()
}

fn letter(jamo: Jamo) -> Option<String> {
    jamo.to_letter().to_char().map(|c| c.to_string())
}
