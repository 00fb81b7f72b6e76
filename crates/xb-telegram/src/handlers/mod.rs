//! Telegram update handlers.
//!
//! Each handler validates the update shape, calls into `xb-core`, and
//! renders the reply. No expense logic lives here.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};

use crate::router::AppState;

mod callback;
mod commands;
mod text;

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    callback::handle_stats_callback(bot, q, state).await
}

pub async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        // Photos, stickers and the like carry no expense text.
        return Ok(());
    };

    if text.starts_with('/') && commands::parse_command(text) == "start" {
        return commands::handle_start(bot, msg).await;
    }

    // Menu buttons, free expense text and unknown slash commands all go
    // through the text handler; non-expenses stay silent there.
    text::handle_text(bot, msg, state).await
}
