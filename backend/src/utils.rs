use chrono::{
    DateTime,
    Datelike,
    NaiveDate,
    NaiveDateTime,
    Utc,
};
use chrono_tz::Europe::London;

/// Impure (reads system clock)
///
/// UK wall-clock time, whatever zone the server itself runs in
#[must_use] pub fn now_datetime() -> NaiveDateTime {
    uk_local(Utc::now())
}

/// Pure
///
/// Holiday dates are UK calendar dates, so "now" has to be compared on the same calendar
#[must_use] pub fn uk_local(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&London).naive_local()
}

/// Pure
#[must_use] pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _)       => "st",
        (2, _)       => "nd",
        (3, _)       => "rd",
        _            => "th",
    }
}

/// Pure
///
/// e.g. "Friday, 25th December 2026"
#[must_use] pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {}{} {}",
        date.format("%A"),
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%B %Y"),
    )
}

/// Pure
///
/// Uppercases the first character of every word, leaving the rest alone
#[must_use] pub fn capitalize_words(text: &str) -> String {
    let mut capitalized = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        let is_word_char = c.is_alphanumeric() || c == '_';
        if is_word_char && !in_word {
            capitalized.extend(c.to_uppercase());
        } else {
            capitalized.push(c);
        }
        in_word = is_word_char;
    }

    capitalized
}

/// Pure
#[must_use] pub fn escape_ssml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
