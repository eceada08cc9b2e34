// 🧩 Derived Blocks - four elements, triangle, unions, grid
// Four Elements / Triangle Ages / Unions are documented placeholders for a
// richer future ruleset. Implement the simplified semantics exactly; swapping
// in the real combination tables later only touches this module.

use crate::core_numbers::{birth_digits, CoreNumbers};
use crate::letters::name_values;
use crate::reduce::{collapse_to_single_digit, reduce_with_master};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// FOUR ELEMENTS
// ============================================================================

/// Body / mind / emotion / intuition, each a single digit in [1,9].
/// Masters are collapsed here (11→2, 22→4, 33→6) - elements never show
/// master numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourElements {
    pub body: u32,
    pub mind: u32,
    pub emotion: u32,
    pub intuition: u32,
}

pub fn compute_four_elements(core: &CoreNumbers) -> FourElements {
    FourElements {
        body: collapse_to_single_digit(core.life_path),
        mind: collapse_to_single_digit(core.destiny),
        emotion: collapse_to_single_digit(core.soul),
        intuition: collapse_to_single_digit(core.personality),
    }
}

// ============================================================================
// TRIANGLE
// ============================================================================

/// Three life-stage age boundaries. Fixed convention, not derived from input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleAges {
    pub early: u32,
    pub middle: u32,
    pub late: u32,
}

pub fn compute_triangle_ages() -> TriangleAges {
    // early = 0-28, middle = 29-56, late = 57+
    TriangleAges {
        early: 28,
        middle: 56,
        late: 99,
    }
}

/// Stage energy numbers: direct copies of reduced core values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleNumbers {
    pub early: u32,
    pub middle: u32,
    pub late: u32,
}

pub fn compute_triangle_numbers(core: &CoreNumbers) -> TriangleNumbers {
    TriangleNumbers {
        early: core.life_path,
        middle: core.destiny,
        late: core.maturity,
    }
}

// ============================================================================
// UNIONS
// ============================================================================

/// Union strings per life stage. String concatenation of reduced values,
/// not arithmetic. One entry per stage for now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unions {
    pub early: Vec<String>,
    pub middle: Vec<String>,
    pub late: Vec<String>,
}

pub fn compute_unions(core: &CoreNumbers) -> Unions {
    Unions {
        early: vec![format!("{}{}", core.life_path, core.destiny)],
        middle: vec![format!("{}{}", core.soul, core.personality)],
        late: vec![core.maturity.to_string()],
    }
}

// ============================================================================
// NINE-BOX GRID
// ============================================================================

/// Occurrence count per digit "1".."9", plus the digits that never appear.
/// BTreeMap keeps the serialized key order stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub counts: BTreeMap<String, u32>,
    pub missing: Vec<u32>,
}

pub fn compute_grid(name: &str, birth: NaiveDate) -> Grid {
    let mut counts: BTreeMap<String, u32> =
        (1..=9).map(|d| (d.to_string(), 0)).collect();

    // Birth date digits, skipping zeros
    for digit in birth_digits(birth) {
        if digit != 0 {
            *counts.get_mut(&digit.to_string()).unwrap() += 1;
        }
    }

    // Name letter values. Single letter values are already ≤ 9, but the
    // reduce keeps this consistent if the table ever goes multi-digit.
    for value in name_values(name) {
        if value != 0 {
            let bucket = reduce_with_master(value);
            *counts.get_mut(&bucket.to_string()).unwrap() += 1;
        }
    }

    let missing = (1..=9)
        .filter(|d| counts[&d.to_string()] == 0)
        .collect();

    Grid { counts, missing }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_numbers::compute_core_numbers;

    fn birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1983, 9, 8).unwrap()
    }

    #[test]
    fn test_four_elements_collapse_masters() {
        let core = compute_core_numbers("YUCHIAOCHUN", birth());
        let four = compute_four_elements(&core);
        // life_path 11 → 2, destiny 11 → 2, soul 22 → 4, personality 7
        assert_eq!(four.body, 2);
        assert_eq!(four.mind, 2);
        assert_eq!(four.emotion, 4);
        assert_eq!(four.intuition, 7);
    }

    #[test]
    fn test_four_elements_in_single_digit_range() {
        let core = compute_core_numbers("YUCHIAOCHUN", birth());
        let four = compute_four_elements(&core);
        for v in [four.body, four.mind, four.emotion, four.intuition] {
            assert!((1..=9).contains(&v));
        }
    }

    #[test]
    fn test_triangle_ages_constants() {
        let ages = compute_triangle_ages();
        assert_eq!(ages.early, 28);
        assert_eq!(ages.middle, 56);
        assert_eq!(ages.late, 99);
    }

    #[test]
    fn test_triangle_numbers_are_copies() {
        let core = compute_core_numbers("YUCHIAOCHUN", birth());
        let tri = compute_triangle_numbers(&core);
        assert_eq!(tri.early, core.life_path);
        assert_eq!(tri.middle, core.destiny);
        assert_eq!(tri.late, core.maturity);
    }

    #[test]
    fn test_unions_concatenate_strings() {
        let core = compute_core_numbers("YUCHIAOCHUN", birth());
        let unions = compute_unions(&core);
        // 11 ++ 11 = "1111", NOT 22
        assert_eq!(unions.early, vec!["1111".to_string()]);
        assert_eq!(unions.middle, vec!["227".to_string()]);
        assert_eq!(unions.late, vec!["22".to_string()]);
    }

    #[test]
    fn test_grid_golden() {
        let grid = compute_grid("YUCHIAOCHUN", birth());
        // birth 19830908 minus zeros: 1,9,8,3,9,8
        // name values: 7,3,3,8,9,1,6,3,8,3,5
        assert_eq!(grid.counts["1"], 2);
        assert_eq!(grid.counts["2"], 0);
        assert_eq!(grid.counts["3"], 5);
        assert_eq!(grid.counts["4"], 0);
        assert_eq!(grid.counts["5"], 1);
        assert_eq!(grid.counts["6"], 1);
        assert_eq!(grid.counts["7"], 1);
        assert_eq!(grid.counts["8"], 4);
        assert_eq!(grid.counts["9"], 3);
        assert_eq!(grid.missing, vec![2, 4]);
    }

    #[test]
    fn test_grid_counts_sum_invariant() {
        let name = "YUCHIAOCHUN";
        let grid = compute_grid(name, birth());
        let total: u32 = grid.counts.values().sum();
        let nonzero_birth = birth_digits(birth()).iter().filter(|d| **d != 0).count();
        let name_letters = name_values(name).iter().filter(|v| **v != 0).count();
        assert_eq!(total as usize, nonzero_birth + name_letters);
        assert_eq!(total, 17);
    }

    #[test]
    fn test_grid_skips_zero_digits() {
        // 2000-01-01 → 2,0,0,0,0,1,0,1: only 2,1,1 counted
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let grid = compute_grid("", date);
        let total: u32 = grid.counts.values().sum();
        assert_eq!(total, 3);
        assert_eq!(grid.counts["1"], 2);
        assert_eq!(grid.counts["2"], 1);
    }
}
