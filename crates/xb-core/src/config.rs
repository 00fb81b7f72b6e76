use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Typed configuration for the bot, loaded from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    /// Supabase project URL, trailing `/` stripped.
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub store_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let bot_token = env_trimmed("BOT_TOKEN");
        let supabase_url = env_trimmed("SUPABASE_URL")
            .trim_end_matches('/')
            .to_string();
        let supabase_service_key = env_trimmed("SUPABASE_SERVICE_KEY");

        if bot_token.is_empty() {
            return Err(Error::Config(
                "BOT_TOKEN environment variable is required".to_string(),
            ));
        }
        if supabase_url.is_empty() {
            return Err(Error::Config(
                "SUPABASE_URL environment variable is required".to_string(),
            ));
        }
        if supabase_service_key.is_empty() {
            return Err(Error::Config(
                "SUPABASE_SERVICE_KEY environment variable is required".to_string(),
            ));
        }

        let store_timeout = Duration::from_secs(env_u64("SUPABASE_TIMEOUT_SECS").unwrap_or(60));

        Ok(Self {
            bot_token,
            supabase_url,
            supabase_service_key,
            store_timeout,
        })
    }
}

fn env_trimmed(key: &str) -> String {
    env::var(key).map(|s| s.trim().to_string()).unwrap_or_default()
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|s| s.trim().parse::<u64>().ok())
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}
