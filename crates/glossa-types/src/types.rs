use serde::{Deserialize, Serialize};

/// Outcome of a dictionary call as seen by clients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    Success,
    #[default]
    Failure,
}

impl ResponseCode {
    pub fn is_success(self) -> bool {
        self == ResponseCode::Success
    }
}

/// Request shared by both operations. `definition` is ignored by lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRequest {
    pub word: String,
    #[serde(alias = "ISOCode", alias = "isoCode")]
    pub language_code: String,
    #[serde(default)]
    pub definition: String,
}

impl WordRequest {
    pub fn lookup(word: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            language_code: language_code.into(),
            definition: String::new(),
        }
    }

    pub fn define(
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
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub code: ResponseCode,
    #[serde(default)]
    pub definition: String,
    /// Language code of the stored entry, which may differ in case from the request
    #[serde(default)]
    pub language_code: String,
}

impl LookupResponse {
    pub fn found(definition: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            code: ResponseCode::Success,
            definition: definition.into(),
            language_code: language_code.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineResponse {
    pub code: ResponseCode,
}

impl DefineResponse {
    pub fn new(code: ResponseCode) -> Self {
        Self { code }
    }
}

/// A single request frame, tagged by method name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum RpcRequest {
    LookUpWord(WordRequest),
    DefineWord(WordRequest),
}

/// A single response frame. `Error` answers frames that are not valid requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum RpcResponse {
    LookUpWord(LookupResponse),
    DefineWord(DefineResponse),
    Error { message: String },
}
