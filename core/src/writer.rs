use crate::store::IndexStore;
use crate::tokenizer::tokenize;
use crate::{FileId, WordId};
use anyhow::Result;
use rusqlite::params;
use std::collections::HashMap;

/// Ingest one document: insert the file row, tokenize `text`, and write one
/// occurrence row per distinct word with its in-document count.
///
/// `text` is the pre-extracted body that gets tokenized; `data` is stored
/// verbatim as the file content. The whole ingestion runs in a single
/// transaction, so a failure leaves no trace and the unit of work can be
/// redelivered. Redelivered documents insert a fresh file row; nothing
/// dedups by name or content.
pub fn ingest(store: &mut IndexStore, file_name: &str, text: &str, data: &[u8]) -> Result<FileId> {
    let tx = store.conn.transaction()?;

    // File row first: an empty body is a valid document with zero occurrences.
    tx.execute(
        "INSERT INTO files (file_name, content) VALUES (?1, ?2)",
        params![file_name, data],
    )?;
    let file_id = tx.last_insert_rowid();

    let mut counts: HashMap<String, i64> = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }

    {
        // Get-or-create must stay race-safe when concurrent consumers see the
        // same new word: the unique constraint serializes creation and the
        // conflict arm hands back the existing id.
        let mut upsert_word = tx.prepare(
            "INSERT INTO words (word) VALUES (?1)
             ON CONFLICT(word) DO UPDATE SET word = excluded.word
             RETURNING word_id",
        )?;
        let mut insert_occurrence = tx
            .prepare("INSERT INTO occurrences (word_id, file_id, count) VALUES (?1, ?2, ?3)")?;

        for (word, count) in &counts {
            let word_id: WordId = upsert_word.query_row(params![word], |row| row.get(0))?;
            insert_occurrence.execute(params![word_id, file_id, count])?;
        }
    }

    tx.commit()?;
    tracing::debug!(file_id, unique_words = counts.len(), "indexed file");
    Ok(file_id)
}
