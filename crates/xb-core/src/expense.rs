use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::UserId;

/// Closed set of spending categories.
///
/// Stored and rendered as the canonical lowercase labels the keyword
/// tables produce (`ovqat`, `internet`, `transport`, `dori`, `boshqa`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Internet,
    Transport,
    Pharmacy,
    #[default]
    Other,
}

impl Category {
    pub fn as_label(self) -> &'static str {
        match self {
            Category::Food => "ovqat",
            Category::Internet => "internet",
            Category::Transport => "transport",
            Category::Pharmacy => "dori",
            Category::Other => "boshqa",
        }
    }

    /// Read a stored label back into the closed set. Anything that is
    /// not a known label (hand-edited rows included) lands in `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "ovqat" => Category::Food,
            "internet" => Category::Internet,
            "transport" => Category::Transport,
            "dori" => Category::Pharmacy,
            _ => Category::Other,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// A single logged expense. Immutable once constructed: the interpreter
/// builds it fully populated and hands it to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub user_id: UserId,
    /// Calendar date the expense is attributed to (submission date).
    pub date: NaiveDate,
    /// Merchant/vendor label, `None` when no keyword matched.
    pub place: Option<String>,
    pub category: Category,
    /// Smallest currency unit, never negative.
    pub amount: i64,
    /// The raw message, kept verbatim for audit.
    pub note: String,
}

/// Row shape returned by [`crate::store::ExpenseStore::query`].
///
/// `category` and `amount` are optional so aggregation survives rows the
/// insert contract should have prevented: a missing category counts as
/// `boshqa`, a missing amount is excluded from sums.
#[derive(Clone, Debug, Deserialize)]
pub struct StoredExpense {
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(rename = "expense_date")]
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_the_closed_set() {
        for c in [
            Category::Food,
            Category::Internet,
            Category::Transport,
            Category::Pharmacy,
            Category::Other,
        ] {
            assert_eq!(Category::from_label(c.as_label()), c);
        }
    }

    #[test]
    fn unknown_labels_fall_back_to_other() {
        assert_eq!(Category::from_label("kiyim"), Category::Other);
        assert_eq!(Category::from_label(""), Category::Other);
        assert_eq!(Category::from_label("  ovqat "), Category::Food);
    }
}
