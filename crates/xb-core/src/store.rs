use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    domain::UserId,
    expense::{ExpenseRecord, StoredExpense},
    Result,
};

/// Persistence port for expenses.
///
/// Supabase is the first implementation; the surface is small enough
/// that any row store with date filtering can sit behind it. The store,
/// not the core, owns consistency across concurrent writes.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Durably persist one record. Failures must surface to the user,
    /// never be swallowed.
    async fn insert(&self, record: &ExpenseRecord) -> Result<()>;

    /// All rows for `user_id` whose date falls within `[from, to]`
    /// inclusive, newest first. An empty result is valid.
    async fn query(
        &self,
        user_id: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<StoredExpense>>;
}
