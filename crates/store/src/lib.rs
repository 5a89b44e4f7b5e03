//! # Petrilink Store
//!
//! Deduplicating record store keyed by CID, backed by SQLite.
//!
//! Two tables share one shape: `models` (petri-net JSON) and `snippets`
//! (JavaScript declarations). Uniqueness is enforced on `cid` at the
//! storage layer; [`Store::get_or_create`] relies on that constraint plus
//! a read-after-conflict fallback instead of any lock, so concurrent
//! ingestions of the same content race safely and exactly one row wins.

#![forbid(unsafe_code)]

mod error;
mod record;

pub use error::{Result, StoreError};
pub use record::{Record, RecordMeta};

use petrilink_codec::{digest, encode_base64, pack_named_file};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// Which artifact table a call addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Model,
    Snippet,
}

impl Kind {
    fn table(self) -> &'static str {
        match self {
            Self::Model => "models",
            Self::Snippet => "snippets",
        }
    }
}

pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Open (and if necessary bootstrap) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, false)
    }

    /// Open the database, dropping any existing tables first when `reset`.
    pub fn open_with(path: impl AsRef<Path>, reset: bool) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        conn.busy_timeout(Duration::from_secs(5))?;
        if reset {
            conn.execute_batch("DROP TABLE IF EXISTS models; DROP TABLE IF EXISTS snippets;")?;
        }
        install_schema(&conn)?;
        log::debug!("Opened store at {}", path.as_ref().display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Insert a new record. Fails with [`StoreError::DuplicateCid`] when a
    /// row with this CID already exists, so callers can fall back to a read.
    pub fn create(
        &self,
        kind: Kind,
        cid: &str,
        base64_zipped: &str,
        meta: &RecordMeta,
    ) -> Result<i64> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        let sql = format!(
            "INSERT INTO {} (cid, base64_zipped, title, description, keywords, referrer)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            kind.table()
        );
        match conn.execute(
            &sql,
            params![
                cid,
                base64_zipped,
                meta.title,
                meta.description,
                meta.keywords,
                meta.referrer
            ],
        ) {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::DuplicateCid(cid.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Look up a record by CID. `None` means no row exists.
    pub fn get_by_cid(&self, kind: Kind, cid: &str) -> Result<Option<Record>> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        let sql = format!(
            "SELECT id, cid, base64_zipped, title, description, keywords, referrer
             FROM {} WHERE cid = ?1",
            kind.table()
        );
        let record = conn
            .query_row(&sql, params![cid], |row| {
                Ok(Record {
                    id: row.get(0)?,
                    cid: row.get(1)?,
                    base64_zipped: row.get(2)?,
                    title: row.get(3)?,
                    description: row.get(4)?,
                    keywords: row.get(5)?,
                    referrer: row.get(6)?,
                })
            })
            .optional()?;
        Ok(record)
    }

    /// Idempotent ingestion of canonical artifact bytes.
    ///
    /// The CID is always `digest(canonical_bytes)` — never the packed or
    /// base64 form — so every ingestion path derives the same dedup key
    /// for the same artifact. The persisted payload is the canonical bytes
    /// re-packed as a single-entry zip named `filename` and base64-encoded,
    /// which is exactly what URL extraction will later unpack.
    ///
    /// Returns the record plus whether this call inserted it. A concurrent
    /// duplicate insert loses the race and recovers by re-reading.
    pub fn get_or_create(
        &self,
        kind: Kind,
        canonical_bytes: &[u8],
        filename: &str,
        meta: &RecordMeta,
    ) -> Result<(Record, bool)> {
        let cid = digest(canonical_bytes);
        let payload = encode_base64(&pack_named_file(filename, canonical_bytes)?);

        match self.create(kind, &cid, &payload, meta) {
            Ok(id) => Ok((
                Record {
                    id,
                    cid,
                    base64_zipped: payload,
                    title: meta.title.clone(),
                    description: meta.description.clone(),
                    keywords: meta.keywords.clone(),
                    referrer: meta.referrer.clone(),
                },
                true,
            )),
            Err(err) if err.is_duplicate() => {
                log::debug!("Insert lost dedup race for cid {cid}, re-reading");
                match self.get_by_cid(kind, &cid)? {
                    Some(record) => Ok((record, false)),
                    None => Err(StoreError::MissingAfterConflict(cid)),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Row count for one table.
    pub fn count(&self, kind: Kind) -> Result<i64> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        Ok(conn.query_row(&sql, [], |row| row.get(0))?)
    }
}

fn install_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS models (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            cid TEXT NOT NULL UNIQUE,
            base64_zipped TEXT NOT NULL,
            title TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            keywords TEXT NOT NULL DEFAULT '',
            referrer TEXT NOT NULL DEFAULT ''
        );
        CREATE TABLE IF NOT EXISTS snippets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            cid TEXT NOT NULL UNIQUE,
            base64_zipped TEXT NOT NULL,
            title TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            keywords TEXT NOT NULL DEFAULT '',
            referrer TEXT NOT NULL DEFAULT ''
        );",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use petrilink_codec::{decode_base64, unpack_named_file};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, Store) {
        let dir = TempDir::new().expect("tempdir");
        let store = Store::open(dir.path().join("petrilink.db")).expect("open store");
        (dir, store)
    }

    #[test]
    fn get_by_cid_on_empty_store_is_none() {
        let (_dir, store) = open_temp();
        assert_eq!(store.get_by_cid(Kind::Model, "deadbeef").expect("get"), None);
    }

    #[test]
    fn create_then_get_round_trips() {
        let (_dir, store) = open_temp();
        let meta = RecordMeta {
            title: "Untitled".into(),
            referrer: "https://example.org/".into(),
            ..RecordMeta::default()
        };
        let id = store
            .create(Kind::Model, "cid-1", "cGF5bG9hZA==", &meta)
            .expect("create");
        let record = store
            .get_by_cid(Kind::Model, "cid-1")
            .expect("get")
            .expect("record exists");
        assert_eq!(record.id, id);
        assert_eq!(record.cid, "cid-1");
        assert_eq!(record.base64_zipped, "cGF5bG9hZA==");
        assert_eq!(record.title, "Untitled");
        assert_eq!(record.referrer, "https://example.org/");
    }

    #[test]
    fn duplicate_create_is_distinguishable() {
        let (_dir, store) = open_temp();
        let meta = RecordMeta::default();
        store
            .create(Kind::Snippet, "cid-dup", "payload", &meta)
            .expect("first create");
        let err = store
            .create(Kind::Snippet, "cid-dup", "payload", &meta)
            .expect_err("second create must conflict");
        assert!(err.is_duplicate(), "unexpected error: {err}");
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let (_dir, store) = open_temp();
        let canonical = br#"{"modelType":"petriNet","places":{}}"#;
        let meta = RecordMeta::with_referrer("https://example.org/p/");

        let (first, created) = store
            .get_or_create(Kind::Model, canonical, "model.json", &meta)
            .expect("first ingestion");
        assert!(created);

        let (second, created_again) = store
            .get_or_create(Kind::Model, canonical, "model.json", &meta)
            .expect("second ingestion");
        assert!(!created_again);

        assert_eq!(first, second);
        assert_eq!(store.count(Kind::Model).expect("count"), 1);
    }

    #[test]
    fn persisted_payload_unpacks_to_canonical_bytes() {
        let (_dir, store) = open_temp();
        let canonical = b"const declaration = {};";
        let (record, _) = store
            .get_or_create(Kind::Snippet, canonical, "declaration.js", &RecordMeta::default())
            .expect("ingest");

        let zipped = decode_base64(&record.base64_zipped).expect("payload is base64");
        let unpacked = unpack_named_file(&zipped, "declaration.js").expect("entry present");
        assert_eq!(unpacked, canonical);
    }

    #[test]
    fn dedup_holds_across_two_store_handles() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("petrilink.db");
        let writer_a = Store::open(&path).expect("open a");
        let writer_b = Store::open(&path).expect("open b");

        let canonical = b"shared content";
        let (a, created_a) = writer_a
            .get_or_create(Kind::Model, canonical, "model.json", &RecordMeta::default())
            .expect("ingest via a");
        let (b, created_b) = writer_b
            .get_or_create(Kind::Model, canonical, "model.json", &RecordMeta::default())
            .expect("ingest via b");

        assert!(created_a);
        assert!(!created_b);
        assert_eq!(a.cid, b.cid);
        assert_eq!(writer_a.count(Kind::Model).expect("count"), 1);
    }

    #[test]
    fn reset_drops_existing_rows() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("petrilink.db");
        {
            let store = Store::open(&path).expect("open");
            store
                .create(Kind::Model, "cid-reset", "payload", &RecordMeta::default())
                .expect("create");
        }
        let store = Store::open_with(&path, true).expect("reopen with reset");
        assert_eq!(store.get_by_cid(Kind::Model, "cid-reset").expect("get"), None);
    }
}
