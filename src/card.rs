// 🃏 Card Assembler - packages everything into one record
// Pure function of (input, as-of date). The caller injects "today" so the
// assembler stays deterministic and testable; only the binaries read a clock.

use crate::blocks::{
    compute_four_elements, compute_grid, compute_triangle_ages, compute_triangle_numbers,
    compute_unions, FourElements, Grid, TriangleAges, TriangleNumbers, Unions,
};
use crate::core_numbers::{compute_core_numbers, CoreNumbers};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// INPUT
// ============================================================================

/// Gender codes. Display-only: gender plays no role in any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    F,
    M,
    /// Other
    O,
    /// Unknown
    U,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::F
    }
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::F => "F",
            Gender::M => "M",
            Gender::O => "O",
            Gender::U => "U",
        }
    }
}

fn default_ruleset() -> String {
    crate::DEFAULT_RULESET.to_string()
}

/// The main calculation input from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcInput {
    pub name: String,

    /// Birth date, YYYY-MM-DD
    pub birth: NaiveDate,

    #[serde(default)]
    pub gender: Gender,

    /// Ruleset version, reserved for A/B rule switching later
    #[serde(default = "default_ruleset")]
    pub ruleset: String,
}

// ============================================================================
// CARD SECTIONS
// ============================================================================

/// Personal header + display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub display_name: Option<String>,
    pub birth: NaiveDate,
    pub gender: Gender,
    pub age: u32,
    /// e.g. "38→11", for the frontend to display
    pub life_path_text: String,
}

/// Flexible extension block for fields added later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraInfo {
    pub note: Option<String>,
    pub raw_data: BTreeMap<String, Value>,
}

/// One complete numerology card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub profile: Profile,
    pub core_numbers: CoreNumbers,
    pub four_elements: FourElements,
    pub triangle_ages: TriangleAges,
    pub triangle_numbers: TriangleNumbers,
    pub unions: Unions,
    pub grid: Grid,
    pub extra: ExtraInfo,
}

// ============================================================================
// ASSEMBLY
// ============================================================================

/// Whole years completed as of `as_of`. Subtract one if the birthday has not
/// yet happened this year. A birth date after `as_of` clamps to 0 instead of
/// going negative.
pub fn age_on(birth: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut age = as_of.year() - birth.year();
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Build the full card for one input, with `as_of` standing in for "today".
pub fn assemble(input: &CalcInput, as_of: NaiveDate) -> Card {
    let core = compute_core_numbers(&input.name, input.birth);

    let profile = Profile {
        name: input.name.clone(),
        display_name: None,
        birth: input.birth,
        gender: input.gender,
        age: age_on(input.birth, as_of),
        life_path_text: format!("{}→{}", core.life_path_raw, core.life_path),
    };

    let four_elements = compute_four_elements(&core);
    let triangle_ages = compute_triangle_ages();
    let triangle_numbers = compute_triangle_numbers(&core);
    let unions = compute_unions(&core);
    let grid = compute_grid(&input.name, input.birth);

    let extra = ExtraInfo {
        note: Some(
            "Demo engine: core numbers use the production algorithm; the other \
             blocks are simplified and will be replaced by the full ruleset."
                .to_string(),
        ),
        raw_data: BTreeMap::new(),
    };

    Card {
        profile,
        core_numbers: core,
        four_elements,
        triangle_ages,
        triangle_numbers,
        unions,
        grid,
        extra,
    }
}

// ============================================================================
// TESTS
// ============================================================================
