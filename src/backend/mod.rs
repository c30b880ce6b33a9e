mod error;
mod interface;
mod kv_store;
pub mod json_store;

pub use error::{PersistenceError, Result};
pub use interface::{EntryStore, KeyValueStore};
pub use kv_store::{FileKvStore, MemoryKvStore};
pub use json_store::JsonStore;
