use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_LOG_FILE: &str = "program.log";

/// Required credentials, in the order they are reported when missing.
/// The second element lists older variable names still accepted as fallbacks.
const CREDENTIALS: [(&str, &[&str]); 3] = [
    ("PRACTICUM_TOKEN", &["YANDEX_TOKEN"]),
    ("TELEGRAM_TOKEN", &[]),
    ("TELEGRAM_CHAT_ID", &["USER_TOKEN"]),
];

/// Runtime configuration, built once at startup and handed to each component.
#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub retry_period: Duration,
    pub log_file: Option<PathBuf>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("retry_period", &self.retry_period)
            .field("log_file", &self.log_file)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let resolved = CREDENTIALS.map(|(name, aliases)| {
            let value = non_empty(name)
                .or_else(|| aliases.iter().find_map(|alias| non_empty(*alias)));
            (name, value)
        });
        let missing: Vec<&'static str> = resolved
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        let [
            (_, Some(practicum_token)),
            (_, Some(telegram_token)),
            (_, Some(telegram_chat_id)),
        ] = resolved
        else {
            return Err(ConfigError::MissingCredentials(missing));
        };

        let endpoint =
            non_empty("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let retry_period = match non_empty("RETRY_PERIOD_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        name: "RETRY_PERIOD_SECS",
                        value: raw,
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS),
        };

        let log_file = log_file_from_lookup(&lookup);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            retry_period,
            log_file,
        })
    }
}

/// Log destination, readable before (and independently of) the credentials so
/// that a failed credential check still reaches the log file.
pub fn log_file_from_env() -> Option<PathBuf> {
    log_file_from_lookup(&|key: &str| std::env::var(key).ok())
}

fn log_file_from_lookup<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    // Present but empty switches the file sink off.
    match lookup("HOMEWORK_BOT_LOG_FILE") {
        Some(v) if v.trim().is_empty() => None,
        Some(v) => Some(PathBuf::from(v.trim())),
        None => Some(PathBuf::from(DEFAULT_LOG_FILE)),
    }
}
