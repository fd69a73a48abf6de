//! Cardinal numbers spelled out as English words.
//!
//! Digits are split into groups of three, most significant first. Each group
//! is spelled as "<n> hundred and <tens>-<ones>" and followed by the scale
//! word for its position ("thousand", "million", ...). Groups after a scale
//! word are separated by a comma, and the final group is joined with "and":
//!
//! `123456` → "one hundred and twenty-three thousand, four hundred and fifty-six"

use tracing::debug_span;

const ONES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const IRREGULAR_TEENS: [&str; 3] = ["ten", "eleven", "twelve"];

const HUNDRED: &str = "hundred";

/// Scale words indexed by magnitude tier (tier 0 = 10^3).
pub const SCALE_WORDS: [&str; 10] = [
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordsError {
    #[error("not a decimal digit string: {0:?}")]
    InvalidInput(String),
    #[error("{digits}-digit number exceeds the largest scale word")]
    TooLarge { digits: usize },
}

/// Spell out a string of decimal digits as English words.
///
/// Leading zeros are ignored; an all-zero input is "zero".
pub fn encode(digits: &str) -> Result<String, WordsError> {
    let _span = debug_span!("words_encode", len = digits.len()).entered();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WordsError::InvalidInput(digits.to_string()));
    }
    if digits.bytes().all(|b| b == b'0') {
        return Ok(ONES[0].to_string());
    }

    let groups = magnitude_groups(digits);
    let last = groups.len() - 1;
    let mut words: Vec<String> = Vec::new();

    for (i, &group) in groups.iter().enumerate() {
        let is_last = i == last;
        push_group(&mut words, group, is_last);

        // A zero group contributes nothing, scale word included.
        if !is_last && group != [0, 0, 0] {
            let scale = SCALE_WORDS
                .get(last - i - 1)
                .ok_or(WordsError::TooLarge {
                    digits: digits.len(),
                })?;
            words.push((*scale).to_string());
        }
    }

    Ok(words.join(" "))
}

/// Split `digits` into three-digit groups, most significant first, padding the
/// leading group with zeros.
fn magnitude_groups(digits: &str) -> Vec<[u8; 3]> {
    let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    let pad = (3 - values.len() % 3) % 3;
    let mut padded = vec![0u8; pad];
    padded.extend(values);
    padded
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect()
}

fn push_group(words: &mut Vec<String>, [hundreds, tens, ones]: [u8; 3], is_last: bool) {
    if hundreds != 0 {
        if let Some(prev) = words.last_mut() {
            prev.push(',');
        }
        words.push(format!("{} {HUNDRED}", ONES[hundreds as usize]));
    }

    if tens == 0 && ones == 0 {
        return;
    }

    push_joiner(words, is_last);
    words.push(match tens {
        0 => ONES[ones as usize].to_string(),
        1 => teen(ones),
        _ => tens_word(tens, ones),
    });
}

/// Join a tens/ones word to what precedes it: "and" after "hundred" or in the
/// final group, otherwise a comma on a preceding scale word.
fn push_joiner(words: &mut Vec<String>, is_last: bool) {
    let Some(prev) = words.last_mut() else {
        return;
    };
    if prev.contains(HUNDRED) || is_last {
        words.push("and".to_string());
    } else if SCALE_WORDS.contains(&prev.as_str()) {
        prev.push(',');
    }
}

fn teen(ones: u8) -> String {
    if let Some(word) = IRREGULAR_TEENS.get(ones as usize) {
        return (*word).to_string();
    }
    let stem = match ones {
        3 => "thir",
        5 => "fif",
        d => ONES[d as usize],
    };
    // "eight" + "een", not "eightteen"
    let suffix = if stem.ends_with('t') { "een" } else { "teen" };
    format!("{stem}{suffix}")
}

fn tens_word(tens: u8, ones: u8) -> String {
    let stem = match tens {
        2 => "twen",
        3 => "thir",
        4 => "for",
        5 => "fif",
        d => ONES[d as usize],
    };
    let suffix = if tens == 8 { "y" } else { "ty" };
    if ones == 0 {
        format!("{stem}{suffix}")
    } else {
        format!("{stem}{suffix}-{}", ONES[ones as usize])
    }
}
