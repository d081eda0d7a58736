// src/core/digits.rs
//! The leaderboard never prints a score as text. Each digit is a sprite element
//! whose class ends in `-<digit>`, e.g. `typography typography-7`; reading the
//! suffixes in document order spells the number.

/// Class suffix → digit value. Anything else is not a digit sprite.
const DIGIT_TABLE: [(&str, u32); 10] = [
    ("0", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
];

/// Text after the last hyphen of a class attribute.
pub fn class_suffix(class: &str) -> Option<&str> {
    let class = class.trim();
    class.rfind('-').map(|i| &class[i + 1..])
}

fn digit_of(suffix: &str) -> Option<u32> {
    DIGIT_TABLE
        .iter()
        .find(|(key, _)| *key == suffix)
        .map(|&(_, d)| d)
}

/// Decode a run of digit-sprite class attributes into a number.
///
/// Returns `None` ("score unset") when there are no tokens, when any token's
/// suffix is not in the digit table, or when the value overflows `u32`.
pub fn digits_from_class_tokens<'a, I>(tokens: I) -> Option<u32>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut value: Option<u32> = None;
    for token in tokens {
        let d = class_suffix(token).and_then(digit_of)?;
        value = Some(value.unwrap_or(0).checked_mul(10)?.checked_add(d)?);
    }
    value
}
