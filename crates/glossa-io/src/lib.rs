pub mod client;
pub mod server;

pub use client::DictionaryClient;
pub use server::serve;
