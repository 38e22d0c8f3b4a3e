use crate::daneo::Daneo;
use crate::disassemble::disassemble;
use crate::eumjeol::Eumjeol;
use crate::jamo::Jamo;

enum Merge {
    // 'ㄱ' + 'ㅏ' -> '가'
    Absorb중성,

    // '각' + 'ㅏ' -> '가' + '가'
    // '닭' + 'ㅏ' -> '달' + '가'
    Move종성,

    // '가' + 'ㄱ' -> '각'
    Attach종성,

    // '고' + 'ㅏ' -> '과'
    Compound중성(Jamo),

    // '달' + 'ㄱ' -> '닭'
    Compound종성(Jamo),
}

// The order of the rules matters: the first one that matches wins.
fn find_merge(curr: &Eumjeol, next: &Eumjeol) -> Option<Merge> {
    if !curr.choseong.is_empty() && curr.jungseong.is_empty() && next.has_only_jungseong() {
        return Some(Merge::Absorb중성);
    }

    if !curr.jongseong.is_empty() && next.has_only_jungseong() {
        return Some(Merge::Move종성);
    }

    if curr.is_open() && next.has_only_choseong() {
        return Some(Merge::Attach종성);
    }

    if curr.is_open() && next.has_only_jungseong() {
        if let Some(중성) = Jamo::compound_jungseong(curr.jungseong, next.jungseong) {
            return Some(Merge::Compound중성(중성));
        }
    }

    if curr.is_closed() && next.has_only_choseong() {
        if let Some(종성) = Jamo::compound_jongseong(curr.jongseong, next.choseong) {
            return Some(Merge::Compound종성(종성));
        }
    }

    None
}

impl Daneo {
    /// Merges consecutive letters into syllables. Blocks that are already
    /// syllables are kept as they are, so it's idempotent.
    ///
    /// It's greedy and never looks ahead more than one block. Non-한글 blocks
    /// are never merged with anything.
    pub fn merge(&self) -> Daneo {
        let mut result: Vec<Eumjeol> = Vec::with_capacity(self.len());

        // whether the last block of `result` can be merged with the next one
        let mut merging = false;

        for next in self.iter() {
            if merging && next.is_hangul() {
                if let Some(curr) = result.last_mut() {
                    if let Some(merge) = find_merge(curr, next) {
                        if let Some(new_block) = apply_merge(curr, next, merge) {
                            result.push(new_block);
                        }

                        continue;
                    }
                }
            }

            result.push(*next);
            merging = next.is_hangul();
        }

        Daneo::from(result)
    }
}

// It returns a new block if the merge creates one.
fn apply_merge(curr: &mut Eumjeol, next: &Eumjeol, merge: Merge) -> Option<Eumjeol> {
    match merge {
        Merge::Absorb중성 => {
            curr.jungseong = next.jungseong;
            None
        },
        Merge::Move종성 => {
            let 종성 = curr.jongseong;

            // onset of the new syllable
            let 초성 = match 종성.split_cluster() {
                Some((first, second)) => {
                    curr.jongseong = first.to_choseong();
                    second.to_choseong()
                },
                None => {
                    curr.jongseong = Jamo::EMPTY;
                    종성.to_choseong()
                },
            };

            Some(Eumjeol::new(초성, next.jungseong, Jamo::EMPTY))
        },
        Merge::Attach종성 => {
            curr.jongseong = next.choseong;
            None
        },
        Merge::Compound중성(중성) => {
            curr.jungseong = 중성;
            None
        },
        Merge::Compound종성(종성) => {
            curr.jongseong = 종성;
            None
        },
    }
}

/// "ㅇㅏㄴㄴㅕㅇ" -> "안녕"
///
/// `s` may contain letters, syllables and anything else.
pub fn assemble(s: &str) -> String {
    disassemble(s).merge().render()
}
