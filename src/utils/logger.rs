/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Sets up the global tracing subscriber
///
/// The level is read from the `LOGLEVEL` environment variable
/// (`DEBUG`, `ERROR`, `WARN`, `TRACE`, anything else means `INFO`).
/// Calling it more than once is harmless: only the first call installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = env::var("LOGLEVEL")
            .unwrap_or_else(|_| "INFO".to_string())
            .to_uppercase();

        let level = parse_level(&log_level);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to set global tracing subscriber: {e}");
            return;
        }
        tracing::debug!("Log level set to: {}", level);
    });
}

fn parse_level(value: &str) -> Level {
    match value {
        "DEBUG" => Level::DEBUG,
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "TRACE" => Level::TRACE,
        _ => Level::INFO,
    }
}
