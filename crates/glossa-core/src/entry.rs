use serde::{Deserialize, Serialize};

/// A stored dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub word: String,
    /// ISO 639-1 code, e.g. "en"
    #[serde(alias = "ISOCode", alias = "isoCode")]
    pub language_code: String,
    pub definition: String,
}

impl Entry {
    pub fn new(
        word: impl Into<String>,
        language_code: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            language_code: language_code.into(),
            definition: definition.into(),
        }
    }

    pub fn key(&self) -> EntryKey {
        EntryKey::new(&self.word, &self.language_code)
    }

    /// Case-insensitive match on word and language code. Whitespace is significant.
    pub fn matches(&self, word: &str, language_code: &str) -> bool {
        eq_ignore_case(&self.word, word) && eq_ignore_case(&self.language_code, language_code)
    }
}

/// Uniqueness key of an entry. The definition is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    word: String,
    language_code: String,
}

impl EntryKey {
    pub fn new(word: &str, language_code: &str) -> Self {
        Self {
            word: fold_case(word).collect(),
            language_code: fold_case(language_code).collect(),
        }
    }
}

/// Per-char lowercase with no final-sigma rule, shared by keys and `matches`
fn fold_case(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    fold_case(a).eq(fold_case(b))
}
