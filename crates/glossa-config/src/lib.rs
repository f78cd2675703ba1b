use serde::{Deserialize, Serialize};

use self::client::ClientConfig;
use self::server::ServerConfig;
use self::store::StoreConfig;

pub mod client;
pub mod server;
pub mod store;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub client: ClientConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            store: StoreConfig::new(),
            client: ClientConfig::new(),
        }
    }
}
