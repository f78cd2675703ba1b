use std::path::PathBuf;

/// Errors raised by the word store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An entry with the same word and language code is already stored
    #[error("Entry for '{word}' ({language_code}) already exists")]
    DuplicateKey { word: String, language_code: String },

    /// The backing file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a valid dictionary document
    #[error("Malformed dictionary file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
