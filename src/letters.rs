// 🔤 Letter-Value Table - Pythagorean 9-group mapping
// Fixed data, not derived: the partition below must stay exactly as-is
// for compatibility with existing cards.

// ============================================================================
// LETTER GROUPS
// ============================================================================

/// The nine letter groups. Group index + 1 is the numeric value.
///
/// 1: A J S    2: B K T    3: C L U
/// 4: D M V    5: E N W    6: F O X
/// 7: G P Y    8: H Q Z    9: I R
const GROUPS: [&str; 9] = [
    "AJS", "BKT", "CLU", "DMV", "ENW", "FOX", "GPY", "HQZ", "IR",
];

/// Lookup table indexed by letter offset from 'A', built at compile time.
static LETTER_VALUES: [u32; 26] = build_table();

const fn build_table() -> [u32; 26] {
    let mut table = [0u32; 26];
    let mut group = 0;
    while group < 9 {
        let chars = GROUPS[group].as_bytes();
        let mut i = 0;
        while i < chars.len() {
            table[(chars[i] - b'A') as usize] = group as u32 + 1;
            i += 1;
        }
        group += 1;
    }
    table
}

// ============================================================================
// LOOKUPS
// ============================================================================

/// Value of a single letter, in [1,9]. Returns 0 for non-alphabetic input.
/// Case-insensitive.
pub fn letter_value(ch: char) -> u32 {
    let upper = ch.to_ascii_uppercase();
    if upper.is_ascii_alphabetic() {
        LETTER_VALUES[(upper as u8 - b'A') as usize]
    } else {
        0
    }
}

/// Is this letter a vowel (A, E, I, O, U)?
pub fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Letter values for every alphabetic character in the name, in order.
/// Non-letters (spaces, hyphens, digits) are skipped.
pub fn name_values(name: &str) -> Vec<u32> {
    name.chars()
        .filter(|ch| ch.is_ascii_alphabetic())
        .map(letter_value)
        .collect()
}

/// Letter values restricted to vowels in the name.
pub fn vowel_values(name: &str) -> Vec<u32> {
    name.chars()
        .filter(|ch| ch.is_ascii_alphabetic() && is_vowel(*ch))
        .map(letter_value)
        .collect()
}

/// Letter values restricted to consonants in the name.
pub fn consonant_values(name: &str) -> Vec<u32> {
    name.chars()
        .filter(|ch| ch.is_ascii_alphabetic() && !is_vowel(*ch))
        .map(letter_value)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_letter_mapped() {
        for ch in 'A'..='Z' {
            let v = letter_value(ch);
            assert!((1..=9).contains(&v), "{} mapped to {}", ch, v);
        }
    }

    #[test]
    fn test_fixed_partition() {
        // Spot-check the literal assignment
        assert_eq!(letter_value('A'), 1);
        assert_eq!(letter_value('J'), 1);
        assert_eq!(letter_value('S'), 1);
        assert_eq!(letter_value('Y'), 7);
        assert_eq!(letter_value('U'), 3);
        assert_eq!(letter_value('H'), 8);
        assert_eq!(letter_value('I'), 9);
        assert_eq!(letter_value('R'), 9);
        assert_eq!(letter_value('Z'), 8);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(letter_value('a'), letter_value('A'));
        assert_eq!(letter_value('y'), 7);
    }

    #[test]
    fn test_non_alphabetic_is_zero() {
        assert_eq!(letter_value('3'), 0);
        assert_eq!(letter_value(' '), 0);
        assert_eq!(letter_value('-'), 0);
        assert_eq!(letter_value('你'), 0);
    }

    #[test]
    fn test_name_values_skip_non_letters() {
        assert_eq!(name_values("A-J 3s"), vec![1, 1, 1]);
        assert_eq!(name_values(""), Vec::<u32>::new());
    }

    #[test]
    fn test_vowel_consonant_split() {
        // YUCHIAOCHUN: vowels U,I,A,O,U / consonants Y,C,H,C,H,N
        assert_eq!(vowel_values("YUCHIAOCHUN"), vec![3, 9, 1, 6, 3]);
        assert_eq!(consonant_values("YUCHIAOCHUN"), vec![7, 3, 8, 3, 8, 5]);
    }

    #[test]
    fn test_no_vowels() {
        assert!(vowel_values("BCDFG").is_empty());
        assert_eq!(consonant_values("BCDFG").len(), 5);
    }
}
