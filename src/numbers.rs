//! Recognizing spoken numbers in the range 1–99.
//!
//! A token counts as a number when it is:
//! - a bare 1–2 digit numeral (`"7"`, `"12"`)
//! - a 1–2 digit numeral with an ordinal suffix (`"3rd"`, `"21ST"`)
//! - an English number word, ordinal, common homophone, or compound ten (`"twenty-one"`,
//!   `"twenty one"`)
//!
//! Tokens are trimmed of surrounding whitespace and trailing sentence punctuation first, since
//! word-level ASR output usually looks like `" One."`.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Smallest and largest value the recognizer will report.
pub const MIN_NUMBER: u32 = 1;
pub const MAX_NUMBER: u32 = 99;

const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

const ONES: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [(&str, u32); 10] = [
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const ORDINALS: [(&str, u32); 10] = [
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
    ("tenth", 10),
];

/// Words transcribers commonly produce in place of a spoken number.
const HOMOPHONES: [(&str, u32); 5] = [("to", 2), ("too", 2), ("for", 4), ("fore", 4), ("ate", 8)];

static NUMBER_WORDS: LazyLock<HashMap<String, u32>> = LazyLock::new(build_number_words);

fn build_number_words() -> HashMap<String, u32> {
    let mut map = HashMap::new();

    for (value, word) in (1..).zip(ONES) {
        map.insert(word.to_owned(), value);
    }
    for (word, value) in TEENS.into_iter().chain(ORDINALS).chain(HOMOPHONES) {
        map.insert(word.to_owned(), value);
    }

    for (tens_value, ten) in (2..).map(|t: u32| t * 10).zip(TENS) {
        map.insert(ten.to_owned(), tens_value);
        for (ones_value, one) in (1..).zip(ONES) {
            let value = tens_value + ones_value;
            map.insert(format!("{ten}-{one}"), value);
            map.insert(format!("{ten} {one}"), value);
        }
    }

    map
}

/// Whether `token` names a number in 1–99.
pub fn is_number(token: &str) -> bool {
    parse_number(token).is_some()
}

/// Parse `token` as a number in 1–99.
///
/// Returns `None` for anything the recognizer does not understand, including numerals outside
/// the supported range (`"0"`, `"100"`).
pub fn parse_number(token: &str) -> Option<u32> {
    let token = normalize(token);
    if token.is_empty() {
        return None;
    }

    if token.as_bytes()[0].is_ascii_digit() {
        return parse_numeral(token);
    }

    NUMBER_WORDS.get(token.to_lowercase().as_str()).copied()
}

fn normalize(token: &str) -> &str {
    token
        .trim()
        .trim_end_matches(['.', ',', ';', ':', '!', '?'])
        .trim_end()
}

fn parse_numeral(token: &str) -> Option<u32> {
    let digits_len = token.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len > 2 {
        return None;
    }

    let (digits, suffix) = token.split_at(digits_len);
    let has_valid_suffix = suffix.is_empty()
        || ORDINAL_SUFFIXES
            .iter()
            .any(|s| suffix.eq_ignore_ascii_case(s));
    if !has_valid_suffix {
        return None;
    }

    let value: u32 = digits.parse().ok()?;
    (MIN_NUMBER..=MAX_NUMBER).contains(&value).then_some(value)
}
