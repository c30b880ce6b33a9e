pub mod entry;
pub mod error;
pub mod ledger;
pub mod summary;

pub use entry::{Amount, Entry, EntryId, Kind};
pub use error::{UnknownKind, ValidationError};
pub use ledger::Ledger;
pub use summary::{MonthlyBucket, Totals};
