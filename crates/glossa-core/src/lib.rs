pub mod entry;
pub mod error;
pub mod file;
pub mod service;
pub mod store;

pub use entry::{Entry, EntryKey};
pub use error::{Result, StoreError};
pub use service::{Dictionary, DictionaryService};
pub use store::WordStore;
