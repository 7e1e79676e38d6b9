//! Configuration for the notifier.

use serde::{Deserialize, Serialize};

/// Port XSOverlay listens on for notifications.
pub const DEFAULT_PORT: u16 = 42069;

/// Host the overlay runs on. Notifications are never sent off the machine.
pub const OVERLAY_HOST: &str = "127.0.0.1";

/// Largest payload a single UDP datagram over IPv4 can carry.
pub const MAX_DATAGRAM_SIZE: usize = 65_507;

/// Configuration for a [`Notifier`](super::Notifier).
///
/// Derives `serde` traits so it can be embedded in an application's own
/// settings file; missing fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// The port the overlay listens on.
    pub port: u16,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl NotifierConfig {
    /// Create a configuration targeting the given port on loopback.
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Set the overlay port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Get the target address string (host:port).
    pub fn target_addr(&self) -> String {
        format!("{}:{}", OVERLAY_HOST, self.port)
    }
}
