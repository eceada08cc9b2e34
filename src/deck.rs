// 🎴 Card Deck - definitions + random draw
// Only card meanings live here; draws are not recorded. The seed deck is a
// demo set, to be replaced by a database / JSON load later.

use anyhow::{bail, Result};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DECK_VERSION: &str = "demo-deck-1";

// ============================================================================
// CARD DEFINITION
// ============================================================================

/// One card's meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card code, e.g. JQ-001
    pub code: String,
    pub name: String,
    /// Short headline (the essence)
    pub short_title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub image_url: String,
    pub suit: Option<String>,
    pub element: Option<String>,
    /// Suggested usage context
    pub recommend_use: Option<String>,
}

// ============================================================================
// DECK
// ============================================================================

/// The full deck, keyed by code order as seeded.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<CardDefinition>,
}

impl Deck {
    /// Build the demo deck.
    pub fn seeded() -> Self {
        let base_url = "https://example.com/jq_cards";

        let cards = vec![
            CardDefinition {
                code: "JQ-001".to_string(),
                name: "Inner Child".to_string(),
                short_title: "Allow vulnerability".to_string(),
                description: "Strength returns when you are willing to see your \
                              own fear, hurt and unease."
                    .to_string(),
                keywords: vec![
                    "acceptance".to_string(),
                    "gentleness".to_string(),
                    "honesty".to_string(),
                ],
                image_url: format!("{}/jq_001.png", base_url),
                suit: Some("Spirit".to_string()),
                element: Some("Water".to_string()),
                recommend_use: Some("Before journaling or checking in with feelings".to_string()),
            },
            CardDefinition {
                code: "JQ-002".to_string(),
                name: "Light of Boundaries".to_string(),
                short_title: "Say no out loud".to_string(),
                description: "Real gentleness includes a clear 'no'.".to_string(),
                keywords: vec![
                    "boundaries".to_string(),
                    "responsibility".to_string(),
                    "respect".to_string(),
                ],
                image_url: format!("{}/jq_002.png", base_url),
                suit: Some("Action".to_string()),
                element: Some("Fire".to_string()),
                recommend_use: Some("Before negotiations or hard conversations".to_string()),
            },
            CardDefinition {
                code: "JQ-003".to_string(),
                name: "Gate of Stillness".to_string(),
                short_title: "Slow down".to_string(),
                description: "Only when you slow your steps can the inner voice \
                              be heard."
                    .to_string(),
                keywords: vec![
                    "stillness".to_string(),
                    "pausing".to_string(),
                    "looking inward".to_string(),
                ],
                image_url: format!("{}/jq_003.png", base_url),
                suit: Some("Soul".to_string()),
                element: Some("Air".to_string()),
                recommend_use: Some("When feeling anxious or rushed".to_string()),
            },
        ];

        Deck { cards }
    }

    /// The whole deck (for an admin listing later).
    pub fn list(&self) -> &[CardDefinition] {
        &self.cards
    }

    /// Single card by code.
    pub fn get(&self, code: &str) -> Option<&CardDefinition> {
        self.cards.iter().find(|card| card.code == code)
    }

    /// Draw one random card. An empty deck is a configuration error, not a
    /// normal outcome.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&CardDefinition> {
        match self.cards.choose(rng) {
            Some(card) => Ok(card),
            None => bail!("Card deck is empty, please configure seed cards."),
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::seeded()
    }
}

// ============================================================================
// TESTS
// ============================================================================
