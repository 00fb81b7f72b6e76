use std::sync::Arc;

use chrono::Local;
use teloxide::prelude::*;
use tracing::warn;

use xb_core::{domain::UserId, formatting::fmt_sum, interpret::interpret};

use crate::router::AppState;
use crate::{stats_keyboard, ADD_EXPENSE_BUTTON, STATS_BUTTON};

pub async fn handle_text(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text().map(|s| s.trim().to_string()) else {
        return Ok(());
    };

    if text == ADD_EXPENSE_BUTTON {
        bot.send_message(msg.chat.id, "Xarajat yozing:\nMasalan: Korzinka 500k bozorlik")
            .await?;
        return Ok(());
    }

    if text == STATS_BUTTON {
        bot.send_message(msg.chat.id, "Qaysi davr?")
            .reply_markup(stats_keyboard())
            .await?;
        return Ok(());
    }

    let today = Local::now().date_naive();
    let Some(record) = interpret(UserId(user.id.0 as i64), &text, today) else {
        // No amount in the message: stay silent, chat channels carry
        // unrelated messages too.
        return Ok(());
    };

    let saved = fmt_sum(record.amount);
    if let Err(e) = state.store.insert(&record).await {
        warn!("insert failed for user {}: {e}", user.id);
        bot.send_message(msg.chat.id, format!("❌ Saqlashda xato: {e}"))
            .await?;
        return Ok(());
    }

    bot.send_message(msg.chat.id, format!("✅ Saqlandi: {saved}"))
        .await?;
    Ok(())
}
