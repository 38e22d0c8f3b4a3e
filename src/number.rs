const DIGITS: [&str; 10] = ["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

// units inside a group of 4 digits
const SMALL_UNITS: [&str; 4] = ["", "십", "백", "천"];

// units of groups, every 4 digits
const LARGE_UNITS: [&str; 18] = [
    "", "만", "억", "조", "경",
    "해", "자", "양", "구", "간",
    "정", "재", "극", "항하사", "아승기",
    "나유타", "불가사의", "무량대수",
];

/// The integer part can have at most this many digits (leading zeros not included).
pub const MAX_INTEGER_DIGITS: usize = SMALL_UNITS.len() * LARGE_UNITS.len();

/// "102001030" -> "일억이백만일천삼십"\
/// "3.14" -> "삼점일사"
///
/// Characters other than digits and `.` are ignored, and so is everything after the second `.`.
/// It returns `None` if the integer part is too long to be read.
pub fn number_to_hangul(s: &str) -> Option<String> {
    let filtered = s.trim().chars().filter(
        |c| c.is_ascii_digit() || *c == '.'
    ).collect::<String>();

    if filtered.is_empty() {
        return Some(String::new());
    }

    let mut fields = filtered.split('.');
    let integer = fields.next().unwrap_or("").trim_start_matches('0');
    let fraction = fields.next().unwrap_or("");

    let digit_count = integer.chars().count();

    if digit_count > MAX_INTEGER_DIGITS {
        return None;
    }

    let mut result = String::new();

    if integer.is_empty() {
        result.push_str(DIGITS[0]);
    }

    else {
        let mut is_group_empty = true;

        for (i, c) in integer.chars().enumerate() {
            let position = digit_count - i - 1;
            let small_unit = position % SMALL_UNITS.len();
            let large_unit = position / SMALL_UNITS.len();

            if c != '0' {
                result.push_str(DIGITS[digit_value(c)]);
                result.push_str(SMALL_UNITS[small_unit]);
                is_group_empty = false;
            }

            if small_unit == 0 {
                // "100000000" is "일억", not "일억만"
                if !is_group_empty {
                    result.push_str(LARGE_UNITS[large_unit]);
                }

                is_group_empty = true;
            }
        }
    }

    if !fraction.is_empty() {
        result.push('점');

        for c in fraction.chars() {
            result.push_str(DIGITS[digit_value(c)]);
        }
    }

    Some(result)
}

fn digit_value(c: char) -> usize {
    c.to_digit(10).unwrap_or(0) as usize
}
