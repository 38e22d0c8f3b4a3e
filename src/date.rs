use chrono::Weekday;

const DAYS: [&str; 30] = [
    "하루", "이틀", "사흘", "나흘", "닷새",
    "엿새", "이레", "여드레", "아흐레", "열흘",
    "열하루", "열이틀", "열사흘", "열나흘", "보름",
    "열엿새", "열이레", "열여드레", "열아흐레", "스무날",
    "스무하루", "스무이틀", "스무사흘", "스무나흘", "스무닷새",
    "스무엿새", "스무이레", "스무여드레", "스무아흐레", "서른날",
];

// starts with Sunday
const WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Native Korean word for a number of days: 1 -> "하루", 15 -> "보름"
///
/// `None` if it's not in 1..=30.
pub fn days(day: i64) -> Option<&'static str> {
    if (1..=DAYS.len() as i64).contains(&day) {
        Some(DAYS[(day - 1) as usize])
    }

    else {
        None
    }
}

/// `Weekday::Mon` -> "월", or "월요일" if `full` is set.
pub fn weekday(weekday: Weekday, full: bool) -> String {
    let name = WEEKDAYS[weekday.num_days_from_sunday() as usize];

    if full {
        format!("{name}요일")
    }

    else {
        name.to_string()
    }
}

/// 0 is Sunday, 6 is Saturday.
pub fn weekday_from_sunday(n: i64) -> Option<Weekday> {
    match n {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
