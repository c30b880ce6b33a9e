use log::debug;

use crate::core::Entry;
use crate::backend::{EntryStore, KeyValueStore, PersistenceError, Result};

pub const DEFAULT_KEY: &str = "expenses";

/// Entries kept as a single JSON array under one key of a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct JsonStore<K> {
    backend: K,
    key: String
}

impl<K: KeyValueStore> JsonStore<K> {
    pub fn new(backend: K) -> JsonStore<K> {
        JsonStore::with_key(backend, DEFAULT_KEY)
    }

    pub fn with_key(backend: K, key: &str) -> JsonStore<K> {
        JsonStore { backend, key: key.to_owned() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut K {
        &mut self.backend
    }
}

impl<K: KeyValueStore> EntryStore for JsonStore<K> {
    fn load(&self) -> Result<Vec<Entry>> {
        let raw = match self.backend.get(&self.key)? {
            Some(raw) => raw,
            None => return Ok(Vec::new())
        };
        let entries: Vec<Entry> = serde_json::from_str(&raw)
            .map_err(|err| PersistenceError::Corrupt { key: self.key.clone(), reason: err.to_string() })?;
        debug!("loaded {} entries from key {:?}", entries.len(), self.key);
        return Ok(entries);
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.backend.set(&self.key, &raw)?;
        debug!("saved {} entries under key {:?}", entries.len(), self.key);
        return Ok(());
    }
}


#[cfg(test)]
mod tests {
    use crate::core::{Entry, Kind};
    use crate::backend::{EntryStore, JsonStore, KeyValueStore, MemoryKvStore, PersistenceError};

    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn entries() -> Vec<Entry> {
        vec![
            Entry::new(1, "Salary", 5000.0, Kind::Income, "2024-01-15"),
            Entry::new(2, "Rent", 1200.0, Kind::Expense, "2024-01-01"),
            Entry::new(3, "Coffee", 0.1 + 0.2, Kind::Expense, "2024-02-03"),
        ]
    }

    #[fixture]
    fn entries_json() -> serde_json::Value {
        json!([
            {"id": 1, "title": "Salary", "amount": 5000.0, "type": "income", "date": "2024-01-15"},
            {"id": 2, "title": "Rent", "amount": 1200.0, "type": "expense", "date": "2024-01-01"},
            {"id": 3, "title": "Coffee", "amount": 0.1 + 0.2, "type": "expense", "date": "2024-02-03"},
        ])
    }

    #[fixture]
    fn store() -> JsonStore<MemoryKvStore> {
        JsonStore::new(MemoryKvStore::new())
    }

    #[rstest]
    fn nothing_stored(store: JsonStore<MemoryKvStore>) {
        assert!(store.load().unwrap().is_empty());
    }

    #[rstest]
    fn save_layout(mut store: JsonStore<MemoryKvStore>, entries: Vec<Entry>, entries_json: serde_json::Value) {
        store.save(&entries).unwrap();
        let raw = store.backend().get("expenses").unwrap().unwrap();
        let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, entries_json);
    }

    #[rstest]
    fn round_trip(mut store: JsonStore<MemoryKvStore>, entries: Vec<Entry>) {
        store.save(&entries).unwrap();
        assert_eq!(store.load().unwrap(), entries);
    }

    #[rstest]
    fn reads_timestamp_ids(mut store: JsonStore<MemoryKvStore>) {
        let raw = r#"[{"id":1705312800000,"title":"Tea","amount":40,"type":"expense","date":"2024-01-15"}]"#;
        store.backend_mut().set("expenses", raw).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![Entry::new(1705312800000, "Tea", 40.0, Kind::Expense, "2024-01-15")]);
    }

    #[rstest]
    #[case("not json")]
    #[case("null")]
    #[case(r#"{"id": 1}"#)]
    #[case(r#"[{"id": 1, "title": "Tea", "amount": 40, "type": "gift", "date": "2024-01-15"}]"#)]
    fn corrupt_content(mut store: JsonStore<MemoryKvStore>, #[case] raw: &str) {
        store.backend_mut().set("expenses", raw).unwrap();
        assert!(matches!(store.load(), Err(PersistenceError::Corrupt { .. })));
    }

    #[test]
    fn custom_key() {
        let mut store = JsonStore::with_key(MemoryKvStore::new(), "budget");
        store.save(&[]).unwrap();
        assert_eq!(store.key(), "budget");
        assert_eq!(store.backend().get("budget").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.backend().get("expenses").unwrap(), None);
    }
}
