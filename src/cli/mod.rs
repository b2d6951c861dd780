use anyhow::Result;
use tracing::{error, info};

use crate::core::config::{self, Config};
use crate::core::error::ConfigError;
use crate::core::poller::PollLoop;
use crate::core::review::PracticumClient;
use crate::core::terminal;
use crate::interfaces::telegram::TelegramNotifier;
use crate::logging;

/// Log each missing credential by name, then the fatal line.
fn report_config_error(err: &ConfigError) {
    if let ConfigError::MissingCredentials(missing) = err {
        for name in missing {
            error!("{} not found", name);
        }
        terminal::print_credentials_hint(missing);
    }
    error!(severity = "critical", "Startup aborted: {}", err);
}

pub async fn run_main() -> Result<()> {
    dotenvy::dotenv().ok();

    logging::init(config::log_file_from_env().as_deref())?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            report_config_error(&err);
            return Err(err.into());
        }
    };

    info!("Starting homework status bot: {:?}", config);
    terminal::print_info("Homework status bot is running. Press Ctrl-C to stop.");

    let api = PracticumClient::new(&config);
    let notifier = TelegramNotifier::new(&config);
    let start_cursor = chrono::Utc::now().timestamp();

    let mut poller = PollLoop::new(&config, Box::new(api), Box::new(notifier), start_cursor);
    poller
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;

    info!(
        "Homework status bot stopped ({:?}, cursor {})",
        poller.phase(),
        poller.cursor()
    );
    Ok(())
}
