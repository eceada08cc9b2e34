// 📓 In-Memory Storage - demo user profile + daily journal
// Fake database: everything is gone when the process exits. The server wraps
// this in Arc<Mutex<_>>; the engine never touches it.

use crate::card::Gender;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// For now we pretend there is exactly one logged-in member.
pub const FIXED_USER_ID: &str = "demo-user-1";

// ============================================================================
// USER PROFILE
// ============================================================================

/// Member profile (simplified).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Free-form remarks / coach notes
    pub note: Option<String>,
}

impl UserProfile {
    fn empty(user_id: &str) -> Self {
        UserProfile {
            user_id: user_id.to_string(),
            name: None,
            display_name: None,
            birth: None,
            gender: None,
            email: None,
            phone: None,
            note: None,
        }
    }
}

/// Patch-style update: only fields with a value are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfileUpdate {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub note: Option<String>,
}

// ============================================================================
// JOURNAL
// ============================================================================

/// One journal record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub user_id: String,
    /// Which day this entry is for
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    /// Mood 1-5, optional
    pub mood: Option<u8>,
    pub tags: Vec<String>,
    /// Whether this counts as a check-in
    pub has_checkin: bool,
    /// Drawn card name (e.g. "Inner Child"), optional
    pub card_name: Option<String>,
    /// Card reminder / key message, optional
    pub card_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/overwrite payload from the frontend.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalEntryCreate {
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub mood: Option<u8>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_checkin")]
    pub has_checkin: bool,
    pub card_name: Option<String>,
    pub card_note: Option<String>,
}

fn default_checkin() -> bool {
    true
}

// ============================================================================
// STORE
// ============================================================================

/// In-memory store for users and journals.
#[derive(Debug, Default)]
pub struct Storage {
    users: HashMap<String, UserProfile>,
    /// key: (user_id, "YYYY-MM-DD")
    journals: HashMap<(String, String), JournalEntry>,
}

impl Storage {
    pub fn new() -> Self {
        Storage::default()
    }

    /// Return the demo user, creating an empty profile on first access.
    pub fn get_or_create_user(&mut self) -> UserProfile {
        self.users
            .entry(FIXED_USER_ID.to_string())
            .or_insert_with(|| UserProfile::empty(FIXED_USER_ID))
            .clone()
    }

    /// Apply a patch to the demo user; untouched fields keep their value.
    pub fn update_user(&mut self, update: UserProfileUpdate) -> UserProfile {
        let mut profile = self.get_or_create_user();
        if let Some(name) = update.name {
            profile.name = Some(name);
        }
        if let Some(display_name) = update.display_name {
            profile.display_name = Some(display_name);
        }
        if let Some(birth) = update.birth {
            profile.birth = Some(birth);
        }
        if let Some(gender) = update.gender {
            profile.gender = Some(gender);
        }
        if let Some(email) = update.email {
            profile.email = Some(email);
        }
        if let Some(phone) = update.phone {
            profile.phone = Some(phone);
        }
        if let Some(note) = update.note {
            profile.note = Some(note);
        }
        self.users.insert(FIXED_USER_ID.to_string(), profile.clone());
        profile
    }

    /// Insert or overwrite the entry for one day. An overwrite keeps the
    /// original created_at.
    pub fn save_journal(&mut self, payload: JournalEntryCreate, now: DateTime<Utc>) -> JournalEntry {
        let key = (FIXED_USER_ID.to_string(), payload.date.to_string());

        let created_at = self
            .journals
            .get(&key)
            .map(|existing| existing.created_at)
            .unwrap_or(now);

        let entry = JournalEntry {
            user_id: FIXED_USER_ID.to_string(),
            date: payload.date,
            title: payload.title,
            content: payload.content,
            mood: payload.mood,
            tags: payload.tags,
            has_checkin: payload.has_checkin,
            card_name: payload.card_name,
            card_note: payload.card_note,
            created_at,
            updated_at: now,
        };

        self.journals.insert(key, entry.clone());
        entry
    }

    /// Entry for one day, if any. `date_str` format: YYYY-MM-DD
    pub fn get_journal(&self, date_str: &str) -> Option<JournalEntry> {
        self.journals
            .get(&(FIXED_USER_ID.to_string(), date_str.to_string()))
            .cloned()
    }

    /// All entries whose date starts with `month_prefix` (e.g. "2025-11"),
    /// sorted by date.
    pub fn list_journals(&self, month_prefix: &str) -> Vec<JournalEntry> {
        let mut result: Vec<JournalEntry> = self
            .journals
            .iter()
            .filter(|((uid, date), _)| uid == FIXED_USER_ID && date.starts_with(month_prefix))
            .map(|(_, entry)| entry.clone())
            .collect();

        result.sort_by_key(|entry| entry.date);
        result
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 20, 10, 0, 0).unwrap()
    }

    fn entry_for(day: u32) -> JournalEntryCreate {
        JournalEntryCreate {
            date: NaiveDate::from_ymd_opt(2025, 11, day).unwrap(),
            title: format!("Day {}", day),
            content: "wrote something".to_string(),
            mood: Some(4),
            tags: vec!["calm".to_string()],
            has_checkin: true,
            card_name: None,
            card_note: None,
        }
    }

    #[test]
    fn test_get_or_create_user() {
        let mut storage = Storage::new();
        let user = storage.get_or_create_user();
        assert_eq!(user.user_id, FIXED_USER_ID);
        assert!(user.name.is_none());
    }

    #[test]
    fn test_update_user_is_a_patch() {
        let mut storage = Storage::new();
        storage.update_user(UserProfileUpdate {
            name: Some("Yu Chiao-Chun".to_string()),
            ..Default::default()
        });
        let user = storage.update_user(UserProfileUpdate {
            email: Some("yu@example.com".to_string()),
            ..Default::default()
        });
        // earlier field survives the second patch
        assert_eq!(user.name.as_deref(), Some("Yu Chiao-Chun"));
        assert_eq!(user.email.as_deref(), Some("yu@example.com"));
    }

    #[test]
    fn test_update_user_note() {
        let mut storage = Storage::new();
        let user = storage.update_user(UserProfileUpdate {
            note: Some("prefers morning sessions".to_string()),
            ..Default::default()
        });
        assert_eq!(user.note.as_deref(), Some("prefers morning sessions"));

        // patching something else leaves the note alone
        let user = storage.update_user(UserProfileUpdate {
            phone: Some("0912-345-678".to_string()),
            ..Default::default()
        });
        assert_eq!(user.note.as_deref(), Some("prefers morning sessions"));
    }

    #[test]
    fn test_save_and_get_journal() {
        let mut storage = Storage::new();
        storage.save_journal(entry_for(5), now());
        let entry = storage.get_journal("2025-11-05").unwrap();
        assert_eq!(entry.title, "Day 5");
        assert!(storage.get_journal("2025-11-06").is_none());
    }

    #[test]
    fn test_overwrite_keeps_created_at() {
        let mut storage = Storage::new();
        let first = storage.save_journal(entry_for(5), now());
        let later = now() + chrono::Duration::hours(3);
        let mut update = entry_for(5);
        update.title = "Day 5 revised".to_string();
        let second = storage.save_journal(update, later);

        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.updated_at, later);
        assert_eq!(second.title, "Day 5 revised");
    }

    #[test]
    fn test_list_journals_filters_and_sorts() {
        let mut storage = Storage::new();
        storage.save_journal(entry_for(20), now());
        storage.save_journal(entry_for(3), now());
        let mut other_month = entry_for(1);
        other_month.date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        storage.save_journal(other_month, now());

        let entries = storage.list_journals("2025-11");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date.to_string(), "2025-11-03");
        assert_eq!(entries[1].date.to_string(), "2025-11-20");
    }
}
