use teloxide::prelude::*;

use crate::main_menu;

pub fn parse_command(text: &str) -> String {
    // Telegram may send `/cmd@botname arg1 ...`
    let first = text.trim().split_whitespace().next().unwrap_or("");
    first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

pub async fn handle_start(bot: Bot, msg: Message) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, "💰 Xarajat botiga xush kelibsiz")
        .reply_markup(main_menu())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_bot_mentions_and_args() {
        assert_eq!(parse_command("/start"), "start");
        assert_eq!(parse_command("/START@xarajat_bot"), "start");
        assert_eq!(parse_command("/start hello"), "start");
        assert_eq!(parse_command("  /help "), "help");
    }
}
