use crate::store::IndexStore;
use crate::tokenizer::tokenize;
use crate::FileSearchResult;
use anyhow::Result;
use std::collections::BTreeSet;

/// Maximum number of hits a search returns.
pub const MAX_RESULTS: usize = 20;

/// Rank files for a free-text query.
///
/// The query is tokenized with the same normalizer documents go through and
/// collapsed to a set of distinct words; matching is word-set based, so a
/// duplicated query word does not multiply a document's score. Each matching
/// file scores the sum of its stored occurrence counts over the query words.
/// Results order by score descending, file id ascending on ties, capped at
/// [`MAX_RESULTS`]. An empty or delimiter-only query returns an empty result
/// without touching the database.
pub fn search(store: &IndexStore, query: &str) -> Result<Vec<FileSearchResult>> {
    let words: BTreeSet<String> = tokenize(query).into_iter().collect();
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; words.len()].join(", ");
    let sql = format!(
        "SELECT f.file_id, f.file_name, f.content, SUM(o.count) AS occurrence_sum
         FROM words w
         JOIN occurrences o ON o.word_id = w.word_id
         JOIN files f ON f.file_id = o.file_id
         WHERE w.word IN ({placeholders})
         GROUP BY f.file_id, f.file_name, f.content
         ORDER BY occurrence_sum DESC, f.file_id ASC
         LIMIT {MAX_RESULTS}"
    );

    let mut stmt = store.conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(words.iter()), |row| {
        Ok(FileSearchResult {
            file_id: row.get(0)?,
            file_name: row.get(1)?,
            content: row.get(2)?,
            occurrence_sum: row.get(3)?,
        })
    })?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}
