use crate::core::Entry;
use crate::backend::Result;

/// Loads the ledger's entries at startup and mirrors them after every mutation.
pub trait EntryStore {
    fn load(&self) -> Result<Vec<Entry>>;
    fn save(&mut self, entries: &[Entry]) -> Result<()>;
}

/// Durable string store with synchronous get/set, in the manner of
/// browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

