pub mod query;
pub mod store;
pub mod tokenizer;
pub mod writer;

use serde::{Deserialize, Serialize};

pub type FileId = i64;
pub type WordId = i64;

/// Unit of work published by the cleaner and consumed by the indexer.
/// Field names and the base64 byte encoding are fixed by the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedEmail {
    pub file_name: String,
    /// Pre-extracted text body; this is what gets tokenized.
    pub content: String,
    /// Original raw bytes, stored verbatim on the file row.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

/// One ranked hit as returned by the query engine and the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSearchResult {
    pub file_id: FileId,
    pub file_name: String,
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
    pub occurrence_sum: i64,
}

/// Serde adapter for byte fields carried as standard base64 strings in JSON.
pub mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(de)?;
        STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}
