//! UDP delivery of notifications to the overlay.
//!
//! This module provides the sending side of the overlay's notification
//! protocol:
//! - **Notifier**: Owns a UDP socket connected to `127.0.0.1:<port>`
//! - **NotifierConfig**: Port selection, embeddable in application settings
//!
//! Each [`Message`](crate::Message) becomes exactly one datagram holding one
//! JSON object. There is no acknowledgement, retry or reconnection.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use xsoverlay_notifier::{Message, Notifier, NotifierConfig};
//!
//! let notifier = Arc::new(Notifier::with_config(NotifierConfig::new(42069))?);
//!
//! let worker = {
//!     let notifier = notifier.clone();
//!     std::thread::spawn(move || notifier.send(Message::new("From a worker")))
//! };
//! notifier.send(Message::new("From main"));
//!
//! worker.join().unwrap();
//! notifier.close();
//! # Ok::<(), xsoverlay_notifier::NotifierError>(())
//! ```

mod config;
mod socket;
mod state;

pub use config::{DEFAULT_PORT, MAX_DATAGRAM_SIZE, NotifierConfig, OVERLAY_HOST};
pub use socket::{DiagnosticHook, Notifier};
pub use state::NotifierState;
