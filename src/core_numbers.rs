// ⭐ Core-Number Calculator - the five core numbers
// Each derivation produces a (raw, reduced) pair. Total functions: degenerate
// inputs (empty name, no vowels) yield (0, 0) instead of an error.

use crate::letters::{consonant_values, name_values, vowel_values};
use crate::reduce::reduce_with_master;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// CORE NUMBERS
// ============================================================================

/// The five core numbers, each as a reduced value plus the unreduced sum
/// that produced it. Reduced values are in [1,9] or {11,22,33}, or 0 for
/// degenerate input (see soul/personality zero policy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreNumbers {
    pub life_path: u32,
    pub life_path_raw: u32,

    pub destiny: u32,
    pub destiny_raw: u32,

    pub soul: u32,
    pub soul_raw: u32,

    pub personality: u32,
    pub personality_raw: u32,

    pub maturity: u32,
    pub maturity_raw: u32,
}

// ============================================================================
// DERIVATIONS
// ============================================================================

/// Digits of the birth date written as YYYYMMDD (always 8 digits).
pub fn birth_digits(birth: NaiveDate) -> Vec<u32> {
    birth
        .format("%Y%m%d")
        .to_string()
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .collect()
}

/// Life path: digit sum of YYYYMMDD, then reduced.
fn calc_life_path(birth: NaiveDate) -> (u32, u32) {
    let raw: u32 = birth_digits(birth).iter().sum();
    (raw, reduce_with_master(raw))
}

/// Sum a value sequence into a (raw, reduced) pair.
/// Empty sequence → (0, 0), the explicit zero policy.
fn reduce_values(values: &[u32]) -> (u32, u32) {
    if values.is_empty() {
        return (0, 0);
    }
    let raw: u32 = values.iter().sum();
    (raw, reduce_with_master(raw))
}

/// Compute all five core numbers for a name + birth date.
pub fn compute_core_numbers(name: &str, birth: NaiveDate) -> CoreNumbers {
    let (life_path_raw, life_path) = calc_life_path(birth);
    let (destiny_raw, destiny) = reduce_values(&name_values(name));
    let (soul_raw, soul) = reduce_values(&vowel_values(name));
    let (personality_raw, personality) = reduce_values(&consonant_values(name));

    // Maturity combines the already-reduced life path and destiny,
    // not their raw sums.
    let maturity_raw = life_path + destiny;
    let maturity = reduce_with_master(maturity_raw);

    CoreNumbers {
        life_path,
        life_path_raw,
        destiny,
        destiny_raw,
        soul,
        soul_raw,
        personality,
        personality_raw,
        maturity,
        maturity_raw,
    }
}

// ============================================================================
// TESTS
// ============================================================================
