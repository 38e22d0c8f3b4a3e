use crate::eumjeol::Eumjeol;
use std::fmt;

/// An ordered sequence of syllable blocks, in reading order.
///
/// It's built by `disassemble` or by `Daneo::merge` and is not modified afterwards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Daneo(Vec<Eumjeol>);

impl Daneo {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// It returns an empty `Eumjeol` if `index` is out of range.
    pub fn at(&self, index: usize) -> Eumjeol {
        self.0.get(index).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Eumjeol> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Eumjeol] {
        &self.0
    }

    pub fn equals(&self, other: &Daneo) -> bool {
        self.len() == other.len()
        && self.iter().zip(other.iter()).all(|(a, b)| a.equals(b))
    }

    /// Renders each block to a syllable (or a letter) and concatenates them.
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(self.len() * 3);

        for eumjeol in self.iter() {
            result.push_str(&eumjeol.render());
        }

        result
    }

    /// The same as `render`.
    pub fn assemble(&self) -> String {
        self.render()
    }

    /// 초성s only. Non-한글 characters are kept as they are.
    ///
    /// "라면" -> "ㄹㅁ"
    pub fn choseong(&self) -> String {
        let mut result = String::with_capacity(self.len() * 3);

        for eumjeol in self.iter() {
            if !eumjeol.choseong.is_empty() {
                result.push_str(&eumjeol.choseong.to_letter().to_string());
            }
        }

        result
    }
}

/// The letters, in reading order. Compound vowels and clusters are split.
///
/// "외과" -> "ㅇㅗㅣㄱㅗㅏ"
impl fmt::Display for Daneo {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for eumjeol in self.iter() {
            if !eumjeol.choseong.is_empty() {
                write!(fmt, "{}", eumjeol.choseong.to_letter())?;
            }

            if !eumjeol.jungseong.is_empty() {
                match eumjeol.jungseong.split_jungseong() {
                    Some((a, b)) => write!(fmt, "{a}{b}")?,
                    None => write!(fmt, "{}", eumjeol.jungseong.to_letter())?,
                }
            }

            if !eumjeol.jongseong.is_empty() {
                match eumjeol.jongseong.split_cluster() {
                    Some((a, b)) => write!(fmt, "{a}{b}")?,
                    None => write!(fmt, "{}", eumjeol.jongseong.to_letter())?,
                }
            }
        }

        Ok(())
    }
}

impl From<Vec<Eumjeol>> for Daneo {
    fn from(v: Vec<Eumjeol>) -> Daneo {
        Daneo(v)
    }
}

impl FromIterator<Eumjeol> for Daneo {
    fn from_iter<I: IntoIterator<Item = Eumjeol>>(iter: I) -> Daneo {
        Daneo(iter.into_iter().collect())
    }
}

impl IntoIterator for Daneo {
    type Item = Eumjeol;
    type IntoIter = std::vec::IntoIter<Eumjeol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Daneo {
    type Item = &'a Eumjeol;
    type IntoIter = std::slice::Iter<'a, Eumjeol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
