//! SQLite-backed exchange store.
//!
//! WAL mode is enabled so history reads don't block writes. Timestamps are
//! stored as fixed-width RFC 3339 text so lexicographic order in SQL equals
//! chronological order; the autoincrement `seq` column breaks ties in
//! insertion order (newest insert first).

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use super::errors::StoreError;
use super::types::{ChatExchange, NewExchange};
use crate::selector::Category;

/// SQLite handle for the exchange collection.
pub struct ChatStore {
    conn: Connection,
}

impl ChatStore {
    /// Open (or create) the store at the given path.
    ///
    /// Pass `":memory:"` for an in-memory database (tests).
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        let store = Self { conn };
        store.create_tables()?;
        Ok(store)
    }

    fn create_tables(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS exchanges (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                model_type TEXT NOT NULL,
                model_used TEXT NOT NULL,
                user_message TEXT NOT NULL,
                bot_reply TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_exchanges_created
                ON exchanges(created_at DESC, seq DESC);
            ",
        )?;
        Ok(())
    }

    /// Insert one exchange and return the store-assigned id.
    pub fn append(&self, exchange: &NewExchange) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO exchanges
             (id, model_type, model_used, user_message, bot_reply, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id,
                exchange.model_type.as_str(),
                exchange.model_used,
                exchange.user_message,
                exchange.bot_reply,
                encode_timestamp(&exchange.created_at),
            ],
        )?;
        Ok(id)
    }

    /// All exchanges, most recent first.
    ///
    /// Returns a fully materialized vector, bounded by current collection
    /// size — never a cursor.
    pub fn list_all(&self) -> Result<Vec<ChatExchange>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, model_type, model_used, user_message, bot_reply, created_at
             FROM exchanges
             ORDER BY created_at DESC, seq DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut exchanges = Vec::new();
        for row in rows {
            let (id, model_type, model_used, user_message, bot_reply, created_at) = row?;
            let model_type = Category::parse(&model_type).ok_or_else(|| {
                StoreError::CorruptRecord {
                    id: id.clone(),
                    reason: format!("unknown model_type '{model_type}'"),
                }
            })?;
            let created_at = decode_timestamp(&id, &created_at)?;
            exchanges.push(ChatExchange {
                id,
                model_type,
                model_used,
                user_message,
                bot_reply,
                created_at,
            });
        }
        Ok(exchanges)
    }
}

// ─── Timestamp encoding ──────────────────────────────────────────────────────

/// Fixed microsecond precision keeps every timestamp the same width, so the
/// TEXT column sorts chronologically.
fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(id: &str, raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::CorruptRecord {
            id: id.to_string(),
            reason: format!("bad timestamp '{raw}': {e}"),
        })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_store() -> ChatStore {
        ChatStore::open(":memory:").unwrap()
    }

    fn exchange_at(message: &str, created_at: DateTime<Utc>) -> NewExchange {
        NewExchange {
            model_type: Category::Chat,
            model_used: "chat-model".to_string(),
            user_message: message.to_string(),
            bot_reply: format!("reply to {message}"),
            created_at,
        }
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        assert!(test_store().list_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_list_newest_first() {
        let store = test_store();
        let base = Utc::now();

        for i in 0..3 {
            let ex = exchange_at(&format!("message {i}"), base + Duration::seconds(i));
            store.append(&ex).unwrap();
        }

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].user_message, "message 2");
        assert_eq!(all[1].user_message, "message 1");
        assert_eq!(all[2].user_message, "message 0");
    }

    #[test]
    fn test_timestamp_ties_break_by_insertion_order() {
        let store = test_store();
        let now = Utc::now();

        store.append(&exchange_at("first insert", now)).unwrap();
        store.append(&exchange_at("second insert", now)).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all[0].user_message, "second insert");
        assert_eq!(all[1].user_message, "first insert");
    }

    #[test]
    fn test_assigned_ids_are_unique() {
        let store = test_store();
        let a = store.append(&exchange_at("a", Utc::now())).unwrap();
        let b = store.append(&exchange_at("b", Utc::now())).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_append_only_leaves_prior_records_unchanged() {
        let store = test_store();
        let base = Utc::now();

        store.append(&exchange_at("original", base)).unwrap();
        let before = store.list_all().unwrap();

        store
            .append(&exchange_at("later", base + Duration::seconds(1)))
            .unwrap();
        let after = store.list_all().unwrap();

        assert_eq!(after.len(), 2);
        assert_eq!(after[1], before[0]);
    }

    #[test]
    fn test_empty_bot_reply_round_trips() {
        let store = test_store();
        let mut ex = exchange_at("silent", Utc::now());
        ex.bot_reply = String::new();
        store.append(&ex).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all[0].bot_reply, "");
    }

    #[test]
    fn test_on_disk_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chats.db");
        let path = path.to_string_lossy();

        {
            let store = ChatStore::open(&path).unwrap();
            store.append(&exchange_at("persisted", Utc::now())).unwrap();
        }

        let reopened = ChatStore::open(&path).unwrap();
        let all = reopened.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].user_message, "persisted");
    }

    #[test]
    fn test_timestamp_encoding_is_fixed_width() {
        let a = encode_timestamp(&"2026-08-30T12:00:00Z".parse().unwrap());
        let b = encode_timestamp(&"2026-08-30T12:00:00.123456789Z".parse().unwrap());
        assert_eq!(a.len(), b.len());
    }
}
