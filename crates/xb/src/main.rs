use std::sync::Arc;

use xb_core::{config::Config, store::ExpenseStore};
use xb_supabase::SupabaseStore;

#[tokio::main]
async fn main() -> Result<(), xb_core::Error> {
    xb_core::logging::init("xb")?;

    let cfg = Arc::new(Config::load()?);
    let store: Arc<dyn ExpenseStore> = Arc::new(SupabaseStore::new(&cfg)?);

    xb_telegram::router::run_polling(cfg, store)
        .await
        .map_err(|e| xb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
