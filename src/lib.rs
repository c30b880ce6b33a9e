mod core;
pub mod backend;
pub mod config;

pub use crate::core::{Amount, Entry, EntryId, Kind, Ledger, MonthlyBucket, Totals, UnknownKind, ValidationError};
pub use crate::core::{entry, ledger, summary};
pub use crate::config::AppConfig;
