//! Parsing of a single number stroke into digits, reversal, and control keys.

use std::fmt;

/// Strokes accepted even though they carry no digit. Each one decorates the
/// output of the preceding strokes.
pub const PERMITTED_NON_DIGIT_STROKES: [&str; 7] = ["#R", "#R*", "#-R", "#*R", "#W", "#-B", "#-G"];

/// The control keys of one stroke, in stroke order.
///
/// Digits, the number bar `#`, the bank separator `-`, and the reversal
/// vowels `E`/`U` are never part of the set. Rules remove the keys they
/// handle; anything left over means the stroke has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlSet {
    keys: Vec<char>,
}

impl ControlSet {
    pub fn contains(&self, key: char) -> bool {
        self.keys.contains(&key)
    }

    pub fn contains_all(&self, keys: &[char]) -> bool {
        keys.iter().all(|&k| self.contains(k))
    }

    /// Remove one occurrence of each of `keys` that is present.
    pub fn consume(&mut self, keys: &[char]) {
        for key in keys {
            if let Some(pos) = self.keys.iter().position(|k| k == key) {
                self.keys.remove(pos);
            }
        }
    }

    /// Remove every occurrence of `keys`.
    pub fn discard(&mut self, keys: &[char]) {
        self.keys.retain(|k| !keys.contains(k));
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for ControlSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.keys.iter().try_for_each(|k| write!(f, "{k}"))
    }
}

impl FromIterator<char> for ControlSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// One stroke of a number outline, e.g. `"12EU"` or `"#-G"`.
#[derive(Debug, Clone)]
pub struct Stroke<'a> {
    raw: &'a str,
    digits: String,
    reversed: bool,
    controls: ControlSet,
}

impl<'a> Stroke<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let mut digits = String::new();
        let mut reversed = false;
        let mut controls = Vec::new();
        for c in raw.chars() {
            match c {
                '0'..='9' => digits.push(c),
                '#' | '-' => {}
                'E' | 'U' => reversed = true,
                _ => controls.push(c),
            }
        }
        Self {
            raw,
            digits,
            reversed,
            controls: ControlSet { keys: controls },
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Digit keys in stroke order.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Whether `E` or `U` was pressed.
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    pub fn into_controls(self) -> ControlSet {
        self.controls
    }

    /// A stroke must carry a digit unless it is one of the permitted
    /// digit-less decorator strokes.
    pub fn is_well_formed(&self) -> bool {
        !self.digits.is_empty() || PERMITTED_NON_DIGIT_STROKES.contains(&self.raw)
    }
}
