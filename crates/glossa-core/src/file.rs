//! On-disk representation of the dictionary.
//!
//! The backing file is a single JSON document:
//!
//! ```json
//! { "dictionary": [ { "word": "cat", "languageCode": "en", "definition": "..." } ] }
//! ```
//!
//! Defines append to the raw document, so fields the store does not model
//! (extra record fields, other top-level keys, legacy `ISOCode` spelling)
//! are written back as they were read.

use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::entry::Entry;
use crate::error::{Result, StoreError};

#[derive(Debug, Deserialize)]
struct DictionaryDocument {
    #[serde(default)]
    dictionary: Vec<Entry>,
}

#[derive(Serialize)]
struct DictionaryDocumentRef<'a> {
    dictionary: &'a [Entry],
}

/// A dictionary file as read from disk: the raw JSON plus its typed entries
#[derive(Debug)]
pub struct Document {
    path: PathBuf,
    raw: Value,
    entries: Vec<Entry>,
}

impl Document {
    /// Parse a dictionary document. Blank content is an empty dictionary.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let malformed = |source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        };

        let raw = if content.trim().is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_str(content).map_err(malformed)?
        };

        if !raw.is_object() {
            return Err(malformed(serde_json::Error::custom(
                "expected a JSON object at the top level",
            )));
        }

        let document = DictionaryDocument::deserialize(&raw).map_err(malformed)?;

        Ok(Self {
            path: path.to_path_buf(),
            raw,
            entries: document.dictionary,
        })
    }

    pub async fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        Self::parse(path, &content)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Append `entry` after every existing record, leaving the rest of the document alone
    pub fn push(&mut self, entry: Entry) -> Result<()> {
        let record = serde_json::to_value(&entry).map_err(std::io::Error::from)?;

        // `parse` guarantees an object whose "dictionary", if present, is an array
        if let Some(object) = self.raw.as_object_mut()
            && let Some(records) = object
                .entry("dictionary")
                .or_insert_with(|| Value::Array(Vec::new()))
                .as_array_mut()
        {
            records.push(record);
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Write the document back to the path it was read from
    pub async fn save(&self) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.raw).map_err(std::io::Error::from)?;
        content.push('\n');

        tracing::debug!(
            "Persisting {} dictionary entries to {}",
            self.entries.len(),
            self.path.display()
        );
        write_atomic(&self.path, &content).await
    }
}

/// Parse a dictionary document into its entries
pub fn parse(path: &Path, content: &str) -> Result<Vec<Entry>> {
    Document::parse(path, content).map(Document::into_entries)
}

pub fn render(entries: &[Entry]) -> serde_json::Result<String> {
    let document = DictionaryDocumentRef {
        dictionary: entries,
    };
    let mut content = serde_json::to_string_pretty(&document)?;
    content.push('\n');
    Ok(content)
}

pub async fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    Document::read(path).await.map(Document::into_entries)
}

/// Replace the document at `path` with a fresh one holding only `entries`
pub async fn write_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    let content = render(entries).map_err(std::io::Error::from)?;
    write_atomic(path, &content).await
}

/// Temp file + `sync_all` + rename
async fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = temp_path(path);

    {
        let mut file = File::create(&temp_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.sync_all().await?;
    }

    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e.into());
    }

    Ok(())
}

pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
