use std::collections::HashMap;

use serde::Serialize;

use crate::core::entry::{Amount, Entry, Kind};

const MONTH_KEY_LEN: usize = 7;

#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize)]
pub struct Totals {
    pub income: Amount,
    pub expense: Amount,
    pub balance: Amount
}

impl Totals {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Totals {
        let mut totals = Totals::default();
        for entry in entries {
            match entry.kind {
                Kind::Income => totals.income += entry.amount,
                Kind::Expense => totals.expense += entry.amount
            }
        }
        totals.balance = totals.income - totals.expense;
        return totals;
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct MonthlyBucket {
    pub month: String,
    pub income: Amount,
    pub expense: Amount
}

impl MonthlyBucket {
    fn new(month: String) -> MonthlyBucket {
        MonthlyBucket { month, income: 0.0, expense: 0.0 }
    }

    fn record(&mut self, entry: &Entry) {
        match entry.kind {
            Kind::Income => self.income += entry.amount,
            Kind::Expense => self.expense += entry.amount
        }
    }
}

/// Grouping key of a date: its first seven UTF-16 code units, taken literally.
/// Malformed dates still yield a key; shorter dates are their own key.
/// A surrogate pair straddling the seventh unit is left out whole.
pub fn month_key(date: &str) -> &str {
    let mut units = 0;
    for (idx, ch) in date.char_indices() {
        units += ch.len_utf16();
        if units > MONTH_KEY_LEN {
            return &date[..idx];
        }
    }
    return date;
}

/// Buckets come out in order of each month's first appearance among `entries`.
pub fn monthly_summary<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<MonthlyBucket> {
    let mut buckets: Vec<MonthlyBucket> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let key = month_key(&entry.date);
        let idx = *position.entry(key).or_insert_with(|| {
            buckets.push(MonthlyBucket::new(key.to_owned()));
            buckets.len() - 1
        });
        buckets[idx].record(entry);
    }
    return buckets;
}
