//! Error types for the notifier.

/// Result type alias for notifier operations.
pub type Result<T> = std::result::Result<T, NotifierError>;

/// Errors that can occur while opening a notifier or delivering a notification.
///
/// Only the construction variants ([`Resolve`](Self::Resolve),
/// [`NoAddress`](Self::NoAddress) and [`Socket`](Self::Socket)) are ever
/// returned to callers. The remaining variants describe send-time failures,
/// which are swallowed and only reach an installed diagnostic hook.
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    /// The overlay address could not be resolved.
    #[error("Failed to resolve overlay address '{address}': {source}")]
    Resolve {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The overlay address resolved, but to nothing usable.
    #[error("Overlay address '{address}' did not resolve to any socket address")]
    NoAddress { address: String },

    /// The local UDP socket could not be created or connected.
    #[error("Failed to open UDP socket: {0}")]
    Socket(#[source] std::io::Error),

    /// The notification could not be serialized.
    #[error("Failed to encode notification: {0}")]
    Encode(#[from] serde_json::Error),

    /// The encoded notification does not fit in a single datagram.
    #[error("Encoded notification is {len} bytes, exceeding the {max} byte datagram limit")]
    Oversized { len: usize, max: usize },

    /// Writing the datagram failed.
    #[error("Failed to send notification datagram: {0}")]
    Send(#[source] std::io::Error),
}

impl NotifierError {
    /// Create a resolution error.
    pub fn resolve(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Resolve {
            address: address.into(),
            source,
        }
    }

    /// Whether this error was raised while opening the notifier.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Self::Resolve { .. } | Self::NoAddress { .. } | Self::Socket(_)
        )
    }
}
