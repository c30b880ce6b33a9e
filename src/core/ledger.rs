use log::{debug, warn};

use crate::core::entry::{Amount, Entry, EntryId, Kind};
use crate::core::error::ValidationError;
use crate::core::summary::{self, MonthlyBucket, Totals};
use crate::backend::EntryStore;

/// Owns the entry sequence and mirrors it to `S` after every mutation.
pub struct Ledger<S: EntryStore> {
    entries: Vec<Entry>,
    // None once the id space is used up.
    next_id: Option<EntryId>,
    store: S
}

impl<S: EntryStore> Ledger<S> {
    /// Hydrates from `store`. Missing or unreadable state yields an empty ledger.
    pub fn open(store: S) -> Ledger<S> {
        let entries = match store.load() {
            Ok(entries) => entries,
            Err(err) => {
                warn!("starting with an empty ledger: {}", err);
                Vec::new()
            }
        };
        let next_id = entries.iter()
            .map(|entry| entry.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        return Ledger { entries, next_id, store };
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add(&mut self, title: &str, amount: &str, kind: Kind, date: &str) -> Result<EntryId, ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if date.is_empty() {
            return Err(ValidationError::EmptyDate);
        }
        let amount = Ledger::<S>::parse_amount(amount)?;

        let id = self.next_id.ok_or(ValidationError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        self.entries.push(Entry::new(id, title, amount, kind, date));
        debug!("added {} entry #{} of {}", kind, id, amount);

        self.persist();
        return Ok(id);
    }

    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return false;
        }
        debug!("removed entry #{}", id);

        self.persist();
        return true;
    }

    pub fn totals(&self) -> Totals {
        Totals::from_entries(&self.entries)
    }

    pub fn monthly_summary(&self) -> Vec<MonthlyBucket> {
        summary::monthly_summary(&self.entries)
    }

    fn parse_amount(raw: &str) -> Result<Amount, ValidationError> {
        let amount = raw.trim().parse::<Amount>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| ValidationError::InvalidAmount(raw.to_owned()))?;
        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount(amount));
        }
        return Ok(amount);
    }

    // A failed save leaves the in-memory state authoritative; the next
    // mutation writes the full sequence again.
    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.entries) {
            warn!("failed to persist {} entries: {}", self.entries.len(), err);
        }
    }
}
