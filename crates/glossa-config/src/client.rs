use std::env;

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "en".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ClientConfig {
    /// Language code used when none is given on the command line
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        let language = env::var("GLOSSA_LANGUAGE").unwrap_or_else(|_| default_language());

        Self { language }
    }
}
