//! Clock Notification Example
//!
//! Sends the current time to XSOverlay every 10 seconds until Ctrl-C.
//!
//! Run with: cargo run -p xsoverlay-notifier --example clock
//! Pass a port as the first argument to override the default (42069).
//! Set `RUST_LOG=xsoverlay_notifier=trace` to watch datagrams go out.

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use xsoverlay_notifier::{Message, Notifier, NotifierConfig, audio};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(port) => NotifierConfig::new(port.parse()?),
        None => NotifierConfig::default(),
    };

    let notifier = Notifier::with_config(config)?.with_diagnostics(|error| {
        tracing::warn!("Notification dropped: {error}");
    });
    tracing::info!("Sending to {}. Press Ctrl-C to exit.", notifier.target_addr());

    let mut ticker = tokio::time::interval(Duration::from_secs(10));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                notifier.send(
                    Message::new("Example Notification!")
                        .timeout(3.0)
                        .content(chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
                        .source_app("XSOverlay_Example_UDP")
                        .audio_path(audio::DEFAULT),
                );
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    notifier.close();
    Ok(())
}
