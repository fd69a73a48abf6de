//! Roman numeral encoding.

/// Largest value expressible without overlined numerals.
pub const MAX_ROMAN: u64 = 3999;

const ROMAN_TABLE: &[(u64, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RomanError {
    #[error("{0} has no roman numeral (expected 1..=3999)")]
    OutOfRange(u64),
}

/// Encode `value` as an upper-case roman numeral using subtractive notation.
///
/// Zero has no roman numeral and is rejected along with anything above 3999.
pub fn encode(value: u64) -> Result<String, RomanError> {
    if value == 0 || value > MAX_ROMAN {
        return Err(RomanError::OutOfRange(value));
    }

    let mut remainder = value;
    let mut out = String::new();
    for &(unit, symbol) in ROMAN_TABLE {
        while remainder >= unit {
            out.push_str(symbol);
            remainder -= unit;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Standard left-to-right roman parser, used to check round trips.
    fn decode(roman: &str) -> u64 {
        let value_of = |c: char| match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => panic!("not a roman digit: {c}"),
        };
        let values: Vec<u64> = roman.chars().map(value_of).collect();
        let mut total = 0;
        for (i, &v) in values.iter().enumerate() {
            match values.get(i + 1) {
                Some(&next) if next > v => total -= v as i64,
                _ => total += v as i64,
            }
        }
        total as u64
    }

    #[test]
    fn test_known_values() {
        assert_eq!(encode(1).unwrap(), "I");
        assert_eq!(encode(4).unwrap(), "IV");
        assert_eq!(encode(9).unwrap(), "IX");
        assert_eq!(encode(14).unwrap(), "XIV");
        assert_eq!(encode(40).unwrap(), "XL");
        assert_eq!(encode(1994).unwrap(), "MCMXCIV");
        assert_eq!(encode(2024).unwrap(), "MMXXIV");
        assert_eq!(encode(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(encode(0), Err(RomanError::OutOfRange(0)));
        assert_eq!(encode(4000), Err(RomanError::OutOfRange(4000)));
        assert!(encode(u64::MAX).is_err());
    }

    proptest! {
        #[test]
        fn roundtrip(value in 1u64..=MAX_ROMAN) {
            let roman = encode(value).unwrap();
            prop_assert_eq!(decode(&roman), value);
        }
    }
}
