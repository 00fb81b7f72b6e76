use std::sync::Arc;

use chrono::Local;
use teloxide::{prelude::*, types::ParseMode};
use tracing::warn;

use xb_core::{
    domain::UserId, formatting::render_summary, period::Period, summary::aggregate,
};

use crate::router::AppState;
use crate::STATS_PREFIX;

pub async fn handle_stats_callback(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let cb_id = q.id.clone();
    let data = q.data.clone().unwrap_or_default();
    let chat_id = q.message.as_ref().map(|m| m.chat.id);

    let (Some(token), Some(chat_id)) = (data.strip_prefix(STATS_PREFIX), chat_id) else {
        let _ = bot.answer_callback_query(cb_id).await;
        return Ok(());
    };

    // Answer right away so Telegram does not expire the query while the
    // store round-trip runs.
    bot.answer_callback_query(cb_id)
        .text("Hisoblayapman...".to_string())
        .await?;

    let today = Local::now().date_naive();
    let range = Period::from_token(token).resolve(today);
    let user_id = UserId(q.from.id.0 as i64);

    let rows = match state.store.query(user_id, range.from, range.to).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("select failed for user {}: {e}", q.from.id);
            bot.send_message(chat_id, format!("❌ Supabase xato: {e}"))
                .await?;
            return Ok(());
        }
    };

    let summary = aggregate(&rows);
    bot.send_message(
        chat_id,
        render_summary(range.title, range.from, range.to, &summary),
    )
    .parse_mode(ParseMode::Html)
    .await?;

    Ok(())
}
