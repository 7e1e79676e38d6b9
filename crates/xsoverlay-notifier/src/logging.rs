//! Tracing integration.
//!
//! The crate only emits `tracing` events; it never installs a subscriber. To
//! see dropped-notification diagnostics, install one in the host application
//! and enable the targets below:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("xsoverlay_notifier=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Socket lifecycle and datagram delivery.
    pub const NOTIFIER: &str = "xsoverlay_notifier::notifier";
    /// Message defaulting and encoding.
    pub const MESSAGE: &str = "xsoverlay_notifier::message";
}
