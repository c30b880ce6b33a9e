use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::core::error::UnknownKind;

pub type Amount = f64;
pub type EntryId = u64;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    #[default]
    Expense
}

impl Kind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense"
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(UnknownKind(s.to_owned()))
        }
    }
}

/// One recorded income or expense. Only the `YYYY-MM` prefix of `date`
/// takes part in aggregation; the rest is carried for display.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub amount: Amount,
    #[serde(rename = "type", alias = "kind")]
    pub kind: Kind,
    pub date: String
}

impl Entry {
    pub fn new(id: EntryId, title: &str, amount: Amount, kind: Kind, date: &str) -> Entry {
        Entry {
            id,
            title: title.to_owned(),
            amount,
            kind,
            date: date.to_owned() }
    }
}
