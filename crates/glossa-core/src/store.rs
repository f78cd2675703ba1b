use std::io;
use std::path::{Path, PathBuf};

use tokio::sync::{Mutex, RwLock};

use crate::entry::{Entry, EntryKey};
use crate::error::{Result, StoreError};
use crate::file;

/// Word list backed by a JSON file.
///
/// Lookups read the in-memory snapshot only. Defines serialize on `writer`,
/// re-read the file as the source of truth, persist, and only then append to
/// the snapshot, so memory never holds an entry the file does not.
#[derive(Debug)]
pub struct WordStore {
    path: PathBuf,
    entries: RwLock<Vec<Entry>>,
    writer: Mutex<()>,
}

impl WordStore {
    /// Load the store from `path`, creating an empty document if none exists.
    ///
    /// # Errors
    /// - `StoreError::Malformed` if the file does not parse
    /// - `StoreError::Io` if the file cannot be read or created
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        tracing::info!("Loading dictionary from {}", path.display());

        let entries = match file::read_entries(&path).await {
            Ok(entries) => entries,
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No dictionary file found, starting with an empty one");
                file::write_entries(&path, &[]).await?;
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        tracing::info!("Loaded {} dictionary entries", entries.len());

        Ok(Self {
            path,
            entries: RwLock::new(entries),
            writer: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// First entry matching `word` and `language_code`, ignoring case
    pub async fn lookup(&self, word: &str, language_code: &str) -> Option<Entry> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .find(|entry| entry.matches(word, language_code))
            .cloned()
    }

    /// Append a new entry unless its key is already present in the backing file.
    ///
    /// # Errors
    /// - `StoreError::DuplicateKey` if the key exists; nothing is written
    /// - `StoreError::Io` / `StoreError::Malformed` if the file cannot be
    ///   read, parsed or written; the in-memory snapshot is left unchanged
    pub async fn define(&self, word: &str, language_code: &str, definition: &str) -> Result<()> {
        let _guard = self.writer.lock().await;

        let key = EntryKey::new(word, language_code);
        let mut document = file::Document::read(&self.path).await?;

        if document.entries().iter().any(|entry| entry.key() == key) {
            return Err(StoreError::DuplicateKey {
                word: word.to_string(),
                language_code: language_code.to_string(),
            });
        }

        let entry = Entry::new(word, language_code, definition);
        document.push(entry.clone())?;
        document.save().await?;

        self.entries.write().await.push(entry);
        tracing::debug!("Defined '{}' ({})", word, language_code);

        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Snapshot of all entries in insertion order
    pub async fn entries(&self) -> Vec<Entry> {
        self.entries.read().await.clone()
    }
}
