use thiserror::Error;

use crate::core::Amount;

/// Reasons an entry is refused by [`Ledger::add`](crate::Ledger::add).
/// A refused entry leaves the ledger untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("date must not be empty")]
    EmptyDate,
    /// The amount text did not coerce to a finite number.
    #[error("amount is not a number: {0:?}")]
    InvalidAmount(String),
    #[error("amount must not be negative: {0}")]
    NegativeAmount(Amount),
    /// Every id up to the largest representable one is taken.
    #[error("no entry ids left to assign")]
    IdsExhausted
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("no such kind: {0:?} (expected income or expense)")]
pub struct UnknownKind(pub String);
