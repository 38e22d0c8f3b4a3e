use crate::{
    BASE_SYLLABLE,
    Daneo,
    Eumjeol,
    Jamo,
    LAST_SYLLABLE,
    assemble,
    can_be_choseong,
    can_be_jongseong,
    can_be_jungseong,
    combine_character,
    combine_vowels,
    disassemble,
    disassemble_char,
    get_choseong,
    has_batchim,
};

fn eumjeol(choseong: char, jungseong: char, jongseong: Option<char>) -> Eumjeol {
    Eumjeol::new(
        Jamo::from(choseong),
        Jamo::from(jungseong),
        jongseong.map(Jamo::from).unwrap_or(Jamo::EMPTY),
    )
}

#[test]
fn assemble_sentence() {
    let sample = [
        ("ㅇㅏㄴㄴㅕㅇ", "안녕"),
        ("ㅇㅗㅣㄱㅗㅏ", "외과"),
        ("ㅇㅏㄴㄴㅕㅇㅎㅏㅅㅔㅇㅛ", "안녕하세요"),

        // a single 'ㄴ' followed by a vowel starts the next syllable
        ("ㅇㅏㄴㅕㅇㅎㅏㅅㅔㅇㅛ", "아녕하세요"),
        (
            "ㅇㅏㄴㄴㅕㅇㅎㅏㅅㅓㅣㅇㅛ. ㅂㅗㄱㅎㅏㅂ ㅈㅜㅇㅅㅓㅇ (ㅇㅡㅣㅅㅏ, ㅇㅗㅣㄱㅗㅏ) ㅂㅗㄱㅎㅏㅂ ㅈㅗㅇㅅㅓㅇ (ㅅㅏㄹㅁ, ㄷㅏㄹㄱ)",
            "안녕하세요. 복합 중성 (의사, 외과) 복합 종성 (삶, 닭)",
        ),
        ("ㅎㅏㄴㄱㅡㄹ", "한글"),
        ("ㄱㅏㄴㅏ", "가나"),
        ("ㅂㅏㄲㅇㅔ", "밖에"),
        ("", ""),
        ("abc", "abc"),
    ];

    for (input, answer) in sample.into_iter() {
        assert_eq!(assemble(input), answer, "input: {input:?}");
    }
}

#[test]
fn assemble_is_idempotent() {
    for s in ["안녕하세요", "복합 종성 (삶, 닭)", "ㄱ ㅏ", "뿱", "hello, 世界"] {
        let once = assemble(s);
        assert_eq!(assemble(&once), once);
    }

    assert_eq!(assemble("안녕하세요"), "안녕하세요");
}

#[test]
fn assemble_edge_cases() {
    let sample = [
        // bare vowels are displayed as letters
        ("ㅏ", "ㅏ"),
        ("ㅗㅏ", "ㅗㅏ"),

        // non-한글 characters reset the merge
        ("aㅏ", "aㅏ"),
        ("가.ㄱ", "가.ㄱ"),
        ("ㄱ ㅏ", "ㄱ ㅏ"),

        // a cluster moves only its second letter to the next syllable
        ("ㄷㅏㄹㄱㅏ", "달가"),
        ("ㅇㅓㅂㅅㅓ", "업서"),

        // 'ㄲ' and 'ㅆ' move as a whole
        ("ㄱㅏㅆㅓ", "가써"),

        // 'ㄸ' cannot be a 종성
        ("ㄱㅏㄸ", "가ㄸ"),
        ("ㄱㅏㄸㅏ", "가따"),

        // no compound for these
        ("ㄱㅏㅓ", "가ㅓ"),
        ("ㄱㅏㄱㄷ", "각ㄷ"),
    ];

    for (input, answer) in sample.into_iter() {
        assert_eq!(assemble(input), answer, "input: {input:?}");
    }
}

#[test]
fn disassemble_sentence() {
    let input = "안녕하세요. 복합 중성 (의사, 외과) 복합 종성 (삶, 닭)";
    let answer = "ㅇㅏㄴㄴㅕㅇㅎㅏㅅㅓㅣㅇㅛ. ㅂㅗㄱㅎㅏㅂ ㅈㅜㅇㅅㅓㅇ (ㅇㅡㅣㅅㅏ, ㅇㅗㅣㄱㅗㅏ) ㅂㅗㄱㅎㅏㅂ ㅈㅗㅇㅅㅓㅇ (ㅅㅏㄹㅁ, ㄷㅏㄹㄱ)";

    assert_eq!(disassemble(input).to_string(), answer);
    assert_eq!(assemble(answer), input);
}

#[test]
fn disassemble_length() {
    for s in ["", "a", "안녕", "ㅇㅏㄴ", "안녕 hello 😀 ㄳ", "\u{1100}\u{1161}"] {
        assert_eq!(disassemble(s).len(), s.chars().count());
    }
}

#[test]
fn disassemble_slots() {
    let sample = [
        ('안', eumjeol('ㅇ', 'ㅏ', Some('ㄴ'))),
        ('가', eumjeol('ㄱ', 'ㅏ', None)),
        ('닭', eumjeol('ㄷ', 'ㅏ', Some('ㄺ'))),
        ('갔', eumjeol('ㄱ', 'ㅏ', Some('ㅆ'))),
        ('ㄱ', Eumjeol { choseong: Jamo::from('ㄱ'), ..Eumjeol::default() }),
        ('ㅘ', Eumjeol { jungseong: Jamo::from('ㅘ'), ..Eumjeol::default() }),
        ('ㄳ', Eumjeol { choseong: Jamo::from('ㄳ'), ..Eumjeol::default() }),
    ];

    for (c, answer) in sample.into_iter() {
        assert!(disassemble_char(c).equals(&answer), "{c:?}: {:?}", disassemble_char(c));
    }

    // non-한글 characters are stored verbatim
    assert_eq!(disassemble_char('.').choseong.to_char(), Some('.'));
    assert_eq!(disassemble_char('a').choseong.to_char(), Some('a'));
    assert!(disassemble_char('a').jungseong.is_empty());

    // canonical forms
    assert_eq!(disassemble_char('ㄱ').choseong.as_u32(), 0x1100);
    assert_eq!(disassemble_char('ㅏ').jungseong.as_u32(), 0x1161);
    assert_eq!(disassemble_char('ㄳ').choseong.as_u32(), 0x11AA);
}

#[test]
fn syllable_round_trip() {
    for c in BASE_SYLLABLE..=LAST_SYLLABLE {
        let c = char::from_u32(c).unwrap();
        let rendered = disassemble_char(c).render();

        assert_eq!(rendered, c.to_string());
        assert_eq!(assemble(&rendered), c.to_string());
        assert_eq!(assemble(&disassemble(&c.to_string()).to_string()), c.to_string());
    }
}

#[test]
fn render_is_lossless() {
    let sample = [
        "안녕하세요",
        "ㄱㄴㄷ",
        "ㅏㅘㅢ",
        "ㄳㄵㅀ ㅄ",
        "닭 삶 갔 밖",
        "",
    ];

    for s in sample.into_iter() {
        assert_eq!(disassemble(s).render(), s);
        assert_eq!(disassemble(s).assemble(), s);
    }
}

#[test]
fn combine_vowels_test() {
    let sample = [
        (("ㅏ", "ㅓ"), "ㅏㅓ"),
        (("ㅡ", "ㅣ"), "ㅢ"),
        (("ㅜ", "ㅓ"), "ㅝ"),
        (("ㅗ", "ㅏ"), "ㅘ"),
        (("ㅗ", "ㅐ"), "ㅙ"),
        (("ㅗ", ""), "ㅗ"),
    ];

    for ((a, b), answer) in sample.into_iter() {
        assert_eq!(combine_vowels(a, b), answer);
    }
}

#[test]
fn combine_character_test() {
    let sample = [
        (("ㅇ", "ㅡㅣ", None), "의"),
        (("ㄱ", "ㅏ", None), "가"),
        (("ㄱ", "ㅏ", Some("ㅆ")), "갔"),
        (("ㅃ", "ㅜㅓ", Some("ㄹㄱ")), "뿱"),
    ];

    for ((choseong, jungseong, jongseong), answer) in sample.into_iter() {
        assert_eq!(combine_character(choseong, jungseong, jongseong), answer);
    }
}

#[test]
fn get_choseong_test() {
    let sample = [
        ("라면", "ㄹㅁ"),
        ("안녕하세요", "ㅇㄴㅎㅅㅇ"),
        ("뽀로로", "ㅃㄹㄹ"),
        ("까마귀", "ㄲㅁㄱ"),
        ("", ""),
    ];

    for (word, answer) in sample.into_iter() {
        assert_eq!(get_choseong(word), answer);
    }
}

#[test]
fn has_batchim_test() {
    let sample = [".", "감", "갃", "강", "가", "", "ㄱ", "abc"];
    let answer = [false, true, true, true, false, false, false, false];

    for (word, answer) in sample.iter().zip(answer.iter()) {
        assert_eq!(has_batchim(word, None), *answer, "{word:?}");
    }

    let sample = ["갂", "가", "각", "갔", "닭"];
    let only_compound = [true, false, false, true, true];
    let only_simple = [false, false, true, false, false];

    for i in 0..sample.len() {
        assert_eq!(has_batchim(sample[i], Some(true)), only_compound[i], "{:?}", sample[i]);
        assert_eq!(has_batchim(sample[i], Some(false)), only_simple[i], "{:?}", sample[i]);
    }
}

#[test]
fn can_be_test() {
    let sample = ["", "ㄱ", "ㅎ", "ㅃ", "ㄱㄱ", "ㅘ", "ㅜ"];
    let answer = [false, true, true, true, false, false, false];

    for (s, answer) in sample.iter().zip(answer.iter()) {
        assert_eq!(can_be_choseong(s), *answer, "can_be_choseong({s:?})");
    }

    let sample = ["", "ㄱ", "ㅃ", "ㄱㄱ", "ㅗ", "ㅘ", "ㅡㅣ", "ㅡㅣㅑ"];
    let answer = [false, false, false, false, true, true, true, false];

    for (s, answer) in sample.iter().zip(answer.iter()) {
        assert_eq!(can_be_jungseong(s), *answer, "can_be_jungseong({s:?})");
    }

    let sample = ["", "ㄱ", "ㅎ", "ㅃ", "ㄱㄱ", "ㅅㅅ", "ㅘ", "ㅜ", "ㅂㅂㅂ", "ㄳ"];
    let answer = [false, true, true, false, true, true, false, false, false, true];

    for (s, answer) in sample.iter().zip(answer.iter()) {
        assert_eq!(can_be_jongseong(s), *answer, "can_be_jongseong({s:?})");
    }
}

#[test]
fn jamo_test() {
    assert!(Jamo::EMPTY.is_empty());
    assert!(Jamo::default().is_empty());
    assert_eq!(Jamo::from('안').to_string(), "안");
    assert_eq!(Jamo::EMPTY.to_string(), "");
    assert!(Jamo::from('안').equals(&Jamo::from('안')));

    // the same letter in different sub-ranges
    let letter = Jamo::from('ㄱ');
    let choseong = Jamo::from('\u{1100}');
    let jongseong = Jamo::from('\u{11A8}');

    assert_ne!(letter, choseong);
    assert!(letter.equals(&choseong));
    assert!(choseong.equals(&jongseong));
    assert!(!letter.equals(&Jamo::from('ㄴ')));

    assert_eq!(choseong.to_letter(), letter);
    assert_eq!(letter.to_choseong(), choseong);
    assert_eq!(choseong.to_jongseong(), jongseong);
    assert_eq!(jongseong.to_choseong(), choseong);

    // identity for everything that's not in the tables
    for c in ['a', '.', '가', '😀'] {
        let j = Jamo::from(c);
        assert_eq!(j.to_letter(), j);
        assert_eq!(j.to_choseong(), j);
        assert_eq!(j.to_jongseong(), j);
        assert!(!j.is_hangul());
    }

    // 'ㄸ' doesn't have a 종성 form
    let ddigeut = Jamo::from('ㄸ').to_choseong();
    assert_eq!(ddigeut.to_jongseong(), ddigeut);

    assert_eq!(Jamo::from('ㅘ').split_jungseong(), Some((Jamo::from('ㅗ'), Jamo::from('ㅏ'))));
    assert_eq!(Jamo::from('ㄺ').split_cluster(), Some((Jamo::from('ㄹ'), Jamo::from('ㄱ'))));
    assert_eq!(Jamo::from('ㄲ').split_cluster(), None);
    assert!(Jamo::from('ㄲ').is_compound_jongseong());
    assert!(!Jamo::from('ㄱ').is_compound_jongseong());
}

#[test]
fn decompose_compound_test() {
    let sample = [
        ('ㅘ', "ㅗㅏ"),
        ('\u{116A}', "ㅗㅏ"),  // ㅘ in 중성 form
        ('ㅢ', "ㅡㅣ"),
        ('ㄺ', "ㄹㄱ"),
        ('\u{11B9}', "ㅂㅅ"),  // ㅄ in 종성 form
        ('ㄲ', "ㄱㄱ"),
        ('ㅆ', "ㅅㅅ"),
        ('ㄱ', "ㄱ"),
        ('\u{11AE}', "ㄷ"),  // ㄷ in 종성 form
        ('ㄸ', "ㄸ"),
        ('ㅏ', "ㅏ"),
        ('a', "a"),
    ];

    for (c, answer) in sample.into_iter() {
        let letters = Jamo::from(c).decompose_compound().iter().map(
            |j| j.to_string()
        ).collect::<Vec<_>>().concat();

        assert_eq!(letters, answer, "{c:?}");
    }

    assert!(Jamo::EMPTY.decompose_compound().is_empty());

    // 'ㄲ' is a 초성 too, so `split_cluster` keeps it whole
    assert_eq!(Jamo::from('ㄲ').split_cluster(), None);
    assert_eq!(Jamo::from('ㄲ').decompose_compound().len(), 2);
}

#[test]
fn eumjeol_test() {
    assert!(Eumjeol::default().is_empty());
    assert_eq!(Eumjeol::default().render(), "");

    let e = eumjeol('ㅇ', 'ㅏ', Some('ㄴ'));
    assert!(!e.is_empty());
    assert!(e.is_hangul());
    assert_eq!(e, disassemble_char('안'));
    assert_eq!(e.choseong.as_u32(), 0x110B);
    assert_eq!(e.jongseong.as_u32(), 0x1102);

    // a struct literal keeps the raw code points
    let raw = Eumjeol { choseong: Jamo::from('ㅇ'), jungseong: Jamo::from('ㅏ'), jongseong: Jamo::EMPTY };
    assert!(!raw.is_hangul());
    assert!(raw.equals(&eumjeol('ㅇ', 'ㅏ', None)));
    assert!(disassemble_char('안').is_hangul());
    assert!(e.equals(&eumjeol('ㅇ', 'ㅏ', Some('ㄴ'))));
    assert!(e.equals(&disassemble_char('안')));
    assert!(!e.equals(&eumjeol('ㅇ', 'ㅏ', None)));
    assert_eq!(e.render(), "안");
    assert_eq!(e.to_string(), "안");
    assert_eq!(e.to_syllable(), Some('안'));

    // degraded rendering
    assert_eq!(eumjeol('ㄱ', 'ㅏ', Some('ㄸ')).render(), "가ㄸ");
    assert_eq!(eumjeol('ㄳ', 'ㅏ', None).render(), "ㄳㅏ");
    assert_eq!(eumjeol('a', 'ㅏ', None).render(), "aㅏ");
    assert_eq!(eumjeol('ㄱ', 'ㅏ', Some('ㄸ')).to_syllable(), None);
}

#[test]
fn daneo_test() {
    let daneo = disassemble("안녕");
    let answer = [
        eumjeol('ㅇ', 'ㅏ', Some('ㄴ')),
        eumjeol('ㄴ', 'ㅕ', Some('ㅇ')),
    ];

    assert_eq!(daneo.len(), 2);
    assert!(!daneo.is_empty());

    for (i, e) in answer.iter().enumerate() {
        assert!(daneo.at(i).equals(e));
    }

    for (i, e) in daneo.iter().enumerate() {
        assert!(e.equals(&answer[i]));
    }

    assert!(daneo.at(3).is_empty());
    assert_eq!(daneo.render(), "안녕");
    assert_eq!(daneo.assemble(), "안녕");
    assert_eq!(daneo.to_string(), "ㅇㅏㄴㄴㅕㅇ");
    assert_eq!(daneo.choseong(), "ㅇㄴ");

    let sample = [("안녕", true), ("안냥", false), ("안녕하세요", false)];

    for (s, answer) in sample.into_iter() {
        assert_eq!(disassemble(s).equals(&daneo), answer);
    }

    let built = Daneo::from(answer.to_vec());
    assert!(built.equals(&daneo));
    assert_eq!(built, daneo);
    assert!(Daneo::default().is_empty());
}

#[test]
fn merge_test() {
    let letters = disassemble("ㄷㅏㄹㄱ ㄷㅏㄹㄱㅏ");
    let merged = letters.merge();

    assert_eq!(letters.len(), 10);
    assert_eq!(merged.len(), 4);
    assert_eq!(merged.render(), "닭 달가");
    assert_eq!(merged.merge(), merged);

    // blocks built from compatibility letters merge like disassembled ones
    let built = Daneo::from(vec![
        eumjeol_choseong('ㄱ'),
        Eumjeol::new(Jamo::EMPTY, Jamo::from('ㅏ'), Jamo::EMPTY),
        eumjeol_choseong('ㄹ'),
        eumjeol_choseong('ㄱ'),
    ]);
    assert_eq!(built.merge().render(), "갉");
    assert_eq!(built, disassemble("ㄱㅏㄹㄱ"));
}

fn eumjeol_choseong(c: char) -> Eumjeol {
    Eumjeol::new(Jamo::from(c), Jamo::EMPTY, Jamo::EMPTY)
}
