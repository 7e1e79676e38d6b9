//! Notification client for XSOverlay.
//!
//! XSOverlay listens for notification requests on a local UDP port. This crate
//! builds those requests and sends them, fire-and-forget:
//!
//! - **Message**: One notification or media player event, with defaulting
//!   for unset fields
//! - **Notifier**: A UDP socket connected to the overlay, safe to share
//!   between threads
//!
//! # Sending a Notification
//!
//! ```no_run
//! use xsoverlay_notifier::{Message, Notifier, audio, icon};
//!
//! let notifier = Notifier::new()?;
//!
//! notifier.send(
//!     Message::new("Download complete")
//!         .content("<color=#8f8>archive.zip</color>")
//!         .timeout(5.0)
//!         .icon(icon::DEFAULT)
//!         .audio_path(audio::DEFAULT)
//!         .source_app("downloader"),
//! );
//!
//! notifier.close();
//! # Ok::<(), xsoverlay_notifier::NotifierError>(())
//! ```
//!
//! # Errors
//!
//! Only opening a [`Notifier`] can fail. Once open, [`Notifier::send`] and
//! [`Notifier::close`] never report anything to the caller; if the overlay is
//! not running, notifications simply do not appear. Dropped sends are logged
//! through `tracing` (see [`logging::targets`]) and can be observed with
//! [`Notifier::with_diagnostics`].

mod error;
pub mod logging;
pub mod message;
pub mod notifier;

pub use error::{NotifierError, Result};

// Re-export commonly used types at the crate root
pub use message::{Message, MessageType, audio, icon};
pub use notifier::{
    DEFAULT_PORT, DiagnosticHook, MAX_DATAGRAM_SIZE, Notifier, NotifierConfig, NotifierState,
};
