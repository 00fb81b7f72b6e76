//! Aggregation of stored expenses over a resolved period.

use crate::expense::{Category, StoredExpense};

/// Total spend plus a per-category breakdown in descending-amount order.
/// Built fresh per request and discarded after rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodSummary {
    pub total: i64,
    pub by_category: Vec<(Category, i64)>,
}

/// Fold rows into a summary. Empty input yields a zero summary, never
/// an error, and the input is left untouched.
///
/// Rows with no amount are skipped entirely; rows with a missing or
/// unknown category count as `boshqa`. The insert contract should
/// prevent both, so this is only a guard against hand-edited rows.
///
/// The breakdown is accumulated in first-occurrence order and then
/// stable-sorted by descending sum, so categories with equal sums keep
/// the order in which they first appeared in the rows.
pub fn aggregate(rows: &[StoredExpense]) -> PeriodSummary {
    let mut total = 0i64;
    let mut by_category: Vec<(Category, i64)> = Vec::new();

    for row in rows {
        let Some(amount) = row.amount else {
            continue;
        };
        let category = row
            .category
            .as_deref()
            .map(Category::from_label)
            .unwrap_or(Category::Other);

        total += amount;
        match by_category.iter_mut().find(|(c, _)| *c == category) {
            Some((_, sum)) => *sum += amount,
            None => by_category.push((category, amount)),
        }
    }

    by_category.sort_by(|a, b| b.1.cmp(&a.1));

    PeriodSummary { total, by_category }
}
