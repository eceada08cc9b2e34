// Numerology Card Engine - Core Library
// Exposes the computation engine plus the demo storage/deck glue for use in
// the CLI, the API server, and tests.

pub mod letters;
pub mod reduce;
pub mod core_numbers;
pub mod blocks;
pub mod card;
pub mod storage;
pub mod deck;

// Re-export commonly used types
pub use letters::{consonant_values, is_vowel, letter_value, name_values, vowel_values};
pub use reduce::{collapse_to_single_digit, digit_sum, reduce_with_master, MASTER_NUMBERS};
pub use core_numbers::{compute_core_numbers, CoreNumbers};
pub use blocks::{
    compute_four_elements, compute_grid, compute_triangle_ages, compute_triangle_numbers,
    compute_unions, FourElements, Grid, TriangleAges, TriangleNumbers, Unions,
};
pub use card::{age_on, assemble, CalcInput, Card, ExtraInfo, Gender, Profile};
pub use storage::{
    JournalEntry, JournalEntryCreate, Storage, UserProfile, UserProfileUpdate, FIXED_USER_ID,
};
pub use deck::{CardDefinition, Deck, DECK_VERSION};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine version reported in API responses
pub const ENGINE_VERSION: &str = "0.2.0";

/// Default ruleset identifier, reserved for A/B rule switching
pub const DEFAULT_RULESET: &str = "jq_default_tw";
