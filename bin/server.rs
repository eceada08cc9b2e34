// Numerology Card Engine - Web Server
// REST API with Axum. The engine stays pure; this binary owns the clock,
// the RNG, and the in-memory storage.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

use numcard::{
    assemble, CalcInput, Card, CardDefinition, Deck, JournalEntry, JournalEntryCreate, Storage,
    UserProfile, UserProfileUpdate, DECK_VERSION, ENGINE_VERSION,
};

/// Shared application state
#[derive(Clone)]
struct AppState {
    storage: Arc<Mutex<Storage>>,
    deck: Arc<Deck>,
    request_counter: Arc<AtomicU64>,
}

impl AppState {
    fn next_request_id(&self) -> u64 {
        self.request_counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

// ============================================================================
// Response types
// ============================================================================

/// Outermost structure returned by /calc
#[derive(Serialize)]
struct CalcResponse {
    request_id: u64,
    engine_version: &'static str,
    ruleset: String,
    card: Card,
}

#[derive(Serialize)]
struct CardDrawResponse {
    request_id: u64,
    deck_version: &'static str,
    card: CardDefinition,
}

#[derive(Serialize)]
struct CardListResponse {
    cards: Vec<CardDefinition>,
}

#[derive(Serialize)]
struct JournalListResponse {
    items: Vec<JournalEntry>,
}

/// Error body for rejected input
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl ErrorResponse {
    fn invalid_input(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "InvalidInput",
                message: message.into(),
            }),
        )
    }
}

#[derive(Deserialize)]
struct JournalListQuery {
    /// Month prefix, e.g. "2025-11"
    month: String,
}

/// Only empty / whitespace-only names are rejected. Names with no mapped
/// letters (e.g. Chinese) are accepted and degenerate to a zero card, same
/// as the reference engine.
fn name_is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET / - Service banner
async fn root() -> impl IntoResponse {
    Json(json!({ "service": "Numerology Card API", "status": "ok" }))
}

/// GET /api/v1/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok", "engine_version": ENGINE_VERSION }))
}

/// POST /api/v1/calc - Compute a full numerology card
///
/// Input validation happens here at the boundary; the engine itself is total
/// and never rejects anything.
async fn calc_card(
    State(state): State<AppState>,
    Json(input): Json<CalcInput>,
) -> impl IntoResponse {
    if name_is_blank(&input.name) {
        return ErrorResponse::invalid_input("name must not be empty").into_response();
    }

    let today = Utc::now().date_naive();
    let card = assemble(&input, today);

    let response = CalcResponse {
        request_id: state.next_request_id(),
        engine_version: ENGINE_VERSION,
        ruleset: input.ruleset,
        card,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/v1/cards - List the whole deck
async fn list_cards(State(state): State<AppState>) -> impl IntoResponse {
    Json(CardListResponse {
        cards: state.deck.list().to_vec(),
    })
}

/// GET /api/v1/cards/draw - Draw one random card (draws are not recorded)
async fn draw_card(State(state): State<AppState>) -> impl IntoResponse {
    match state.deck.draw(&mut rand::rng()) {
        Ok(card) => (
            StatusCode::OK,
            Json(CardDrawResponse {
                request_id: state.next_request_id(),
                deck_version: DECK_VERSION,
                card: card.clone(),
            }),
        )
            .into_response(),
        Err(e) => {
            eprintln!("Error drawing card: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "EmptyDeck", "message": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// GET /api/v1/cards/:code - Single card by code
async fn get_card(State(state): State<AppState>, Path(code): Path<String>) -> impl IntoResponse {
    match state.deck.get(&code) {
        Some(card) => (StatusCode::OK, Json(card.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "NotFound", "message": format!("no card with code {}", code) })),
        )
            .into_response(),
    }
}

/// GET /api/v1/missions - Placeholder, mission content comes later
async fn list_missions() -> impl IntoResponse {
    Json(json!({ "message": "missions ok" }))
}

/// GET /api/v1/user - Demo user's profile
async fn get_user(State(state): State<AppState>) -> Json<UserProfile> {
    let mut storage = state.storage.lock().unwrap();
    Json(storage.get_or_create_user())
}

/// PUT /api/v1/user - Patch the demo user's profile
async fn update_user(
    State(state): State<AppState>,
    Json(update): Json<UserProfileUpdate>,
) -> Json<UserProfile> {
    let mut storage = state.storage.lock().unwrap();
    Json(storage.update_user(update))
}

/// POST /api/v1/journals - Create or overwrite one day's journal entry
async fn save_journal(
    State(state): State<AppState>,
    Json(payload): Json<JournalEntryCreate>,
) -> Json<JournalEntry> {
    let mut storage = state.storage.lock().unwrap();
    Json(storage.save_journal(payload, Utc::now()))
}

/// GET /api/v1/journals?month=YYYY-MM - Entries for a month, sorted by date
async fn list_journals(
    State(state): State<AppState>,
    Query(query): Query<JournalListQuery>,
) -> Json<JournalListResponse> {
    let storage = state.storage.lock().unwrap();
    Json(JournalListResponse {
        items: storage.list_journals(&query.month),
    })
}

/// GET /api/v1/journals/:date - One day's entry
async fn get_journal(State(state): State<AppState>, Path(date): Path<String>) -> impl IntoResponse {
    let storage = state.storage.lock().unwrap();
    match storage.get_journal(&date) {
        Some(entry) => (StatusCode::OK, Json(entry)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "NotFound", "message": format!("no journal for {}", date) })),
        )
            .into_response(),
    }
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 Numerology Card Engine - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let state = AppState {
        storage: Arc::new(Mutex::new(Storage::new())),
        deck: Arc::new(Deck::seeded()),
        request_counter: Arc::new(AtomicU64::new(0)),
    };

    println!("✓ Deck loaded: {} cards", state.deck.list().len());

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/calc", post(calc_card))
        .route("/cards", get(list_cards))
        .route("/cards/draw", get(draw_card))
        .route("/cards/:code", get(get_card))
        .route("/missions", get(list_missions))
        .route("/user", get(get_user).put(update_user))
        .route("/journals", post(save_journal).get(list_journals))
        .route("/journals/:date", get(get_journal))
        .with_state(state.clone());

    // Build main router
    let app = Router::new()
        .route("/", get(root))
        .nest("/api/v1", api_routes)
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:8000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:8000");
    println!("   API: http://localhost:8000/api/v1/calc");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_rejected() {
        assert!(name_is_blank(""));
        assert!(name_is_blank("   "));
        assert!(name_is_blank("\t\n"));
    }

    #[test]
    fn test_unmapped_letter_names_accepted() {
        // Chinese input is valid: it produces a zero card, not a 422
        assert!(!name_is_blank("喬鈞"));
        assert!(!name_is_blank("YUCHIAOCHUN"));
        assert!(!name_is_blank(" 喬鈞 "));
    }

    #[tokio::test]
    async fn test_missions_placeholder() {
        let response = list_missions().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "missions ok");
    }
}
