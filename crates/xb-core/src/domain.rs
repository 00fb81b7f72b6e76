/// Telegram user id (numeric). Every stored expense belongs to exactly
/// one user id, and every query is scoped to one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);
