//! Telegram adapter (teloxide).
//!
//! Menus, keyboards and update handlers live here; all expense logic
//! stays in `xb-core`.

use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
};

pub mod handlers;
pub mod router;

/// Reply-keyboard button labels (must match incoming text exactly).
pub const ADD_EXPENSE_BUTTON: &str = "➕ Xarajat qo‘shish";
pub const STATS_BUTTON: &str = "📊 Xarajatlar";

/// Callback-data prefix for the period buttons (`stats:day` etc).
pub const STATS_PREFIX: &str = "stats:";

/// Persistent two-button main menu.
pub fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new([[
        KeyboardButton::new(ADD_EXPENSE_BUTTON),
        KeyboardButton::new(STATS_BUTTON),
    ]])
    .resize_keyboard(true)
}

/// Inline keyboard with the four reporting periods.
pub fn stats_keyboard() -> InlineKeyboardMarkup {
    let period = |label: &str, token: &str| {
        InlineKeyboardButton::callback(label.to_string(), format!("{STATS_PREFIX}{token}"))
    };

    InlineKeyboardMarkup::new([
        vec![period("📅 Kunlik", "day"), period("🗓 Haftalik", "week")],
        vec![period("🗓 Oylik", "month"), period("📆 Yillik", "year")],
    ])
}
