use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Handle over the relational index: files, words, occurrences.
///
/// A file row is immutable after insert. Words are created lazily on first
/// sighting and never updated or deleted; `words.word` carries the uniqueness
/// constraint the writer's upsert relies on. Occurrences key on
/// `(word_id, file_id)` and are only written inside the ingestion that
/// creates their file.
pub struct IndexStore {
    pub(crate) conn: Connection,
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS files (
    file_id   INTEGER PRIMARY KEY AUTOINCREMENT,
    file_name TEXT NOT NULL,
    content   BLOB NOT NULL
);

CREATE TABLE IF NOT EXISTS words (
    word_id INTEGER PRIMARY KEY AUTOINCREMENT,
    word    TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS occurrences (
    word_id INTEGER NOT NULL REFERENCES words(word_id),
    file_id INTEGER NOT NULL REFERENCES files(file_id),
    count   INTEGER NOT NULL CHECK (count >= 1),
    PRIMARY KEY (word_id, file_id)
) WITHOUT ROWID;
";

impl IndexStore {
    /// Open (creating if needed) the index database at `path`.
    ///
    /// WAL journaling lets searches read a consistent snapshot while a
    /// consumer commits; the busy timeout makes concurrent writers wait
    /// instead of failing immediately.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::init(Connection::open(path)?)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}
