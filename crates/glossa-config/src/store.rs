use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("data").join("dictionary.json")
}

/// Location of the backing dictionary file
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        let path = env::var_os("GLOSSA_DICTIONARY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_path);

        Self { path }
    }
}
