use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, Recipient};
use tracing::{debug, error};

use crate::core::config::Config;
use crate::core::notifier::Notifier;

/// Parse a configured chat id: a numeric id, or an `@channel` username.
pub fn parse_recipient(raw: &str) -> Recipient {
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(raw.to_string()),
    }
}

pub struct TelegramNotifier {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Self {
        Self::with_bot(Bot::new(&config.telegram_token), &config.telegram_chat_id)
    }

    pub fn with_bot(bot: Bot, chat_id: &str) -> Self {
        Self {
            bot,
            recipient: parse_recipient(chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) {
        match self.bot.send_message(self.recipient.clone(), text).await {
            Ok(_) => debug!("Telegram message sent: {}", text),
            Err(e) => error!("Failed to send Telegram message '{}': {}", text, e),
        }
    }
}
