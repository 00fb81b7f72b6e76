use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use xb_core::{config::Config, store::ExpenseStore};

use crate::handlers;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ExpenseStore>,
}

pub async fn run_polling(cfg: Arc<Config>, store: Arc<dyn ExpenseStore>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    // Basic startup info.
    if let Ok(me) = bot.get_me().await {
        println!("xarajat bot started: @{}", me.username());
    }

    let state = Arc::new(AppState { store });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
